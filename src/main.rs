mod app;
mod screens;
use app::App;

use edu_center::config::Config;
use edu_center::ApiClient;

fn main() -> iced::Result {
    pretty_env_logger::init();

    let config = Config::load();
    log::info!(
        "auth: {}, data: {}, public: {}, booking: {}",
        config.auth_url,
        config.data_url,
        config.public_url,
        config.booking_url
    );
    let api = match ApiClient::new(&config) {
        Ok(api) => api,
        Err(e) => {
            log::error!("cannot build http client: {}", e);
            std::process::exit(1);
        }
    };

    iced::application("Образовательный центр", App::update, App::view)
        .theme(|app: &App| app.theme.clone())
        .window_size(iced::Size::new(1400.0, 800.0))
        .run_with(move || App::new(config, api))
}
