use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::models::{NotificationSetting, NotificationType};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NotificationError {
    #[error("Канал {0} не настроен на сервере")]
    NotConfigured(NotificationType),

    #[error("Некорректный email: {0}")]
    InvalidEmail(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChannelForm {
    pub id: Option<i64>,
    pub enabled: bool,
    pub value: String,
    /// Edited locally and not saved yet.
    pub dirty: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationsForm {
    pub email: ChannelForm,
    pub telegram: ChannelForm,
}

impl NotificationsForm {
    /// Refreshes both channels from the loaded rows. A missing row or unsaved local edits
    /// leave that channel as it was.
    pub fn sync(&mut self, settings: &[NotificationSetting]) {
        for kind in [NotificationType::Email, NotificationType::Telegram] {
            let Some(setting) = settings.iter().find(|s| s.notification_type == kind) else {
                continue;
            };
            let channel = self.channel_mut(kind);
            if channel.dirty {
                log::debug!("keeping unsaved {} notification edits", kind);
                continue;
            }
            *channel = ChannelForm {
                id: setting.id,
                enabled: setting.is_enabled,
                value: setting.value.clone().unwrap_or_default(),
                dirty: false,
            };
        }
    }

    /// Channel for a user edit; marks it as changed.
    pub fn edit(&mut self, kind: NotificationType) -> &mut ChannelForm {
        let channel = self.channel_mut(kind);
        channel.dirty = true;
        channel
    }

    /// The server has the channel's current values; the next sync may overwrite it again.
    pub fn mark_saved(&mut self, kind: NotificationType) {
        self.channel_mut(kind).dirty = false;
    }

    pub fn channel(&self, kind: NotificationType) -> &ChannelForm {
        match kind {
            NotificationType::Email => &self.email,
            NotificationType::Telegram => &self.telegram,
        }
    }

    pub fn channel_mut(&mut self, kind: NotificationType) -> &mut ChannelForm {
        match kind {
            NotificationType::Email => &mut self.email,
            NotificationType::Telegram => &mut self.telegram,
        }
    }

    /// The row to PUT for a channel. Only channels that already exist server-side can be saved.
    pub fn to_setting(&self, kind: NotificationType) -> Result<NotificationSetting, NotificationError> {
        let channel = self.channel(kind);
        let id = channel.id.ok_or(NotificationError::NotConfigured(kind))?;
        let value = channel.value.trim().to_string();
        if kind == NotificationType::Email && channel.enabled && !is_email(&value) {
            return Err(NotificationError::InvalidEmail(value));
        }
        Ok(NotificationSetting {
            id: Some(id),
            notification_type: kind,
            is_enabled: channel.enabled,
            value: Some(value),
        })
    }
}

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

pub fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}
