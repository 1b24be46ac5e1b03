use routinely_api::Application;
use routinely_infra::{Config, Context, Repos};
use routinely_sdk::RoutinelySDK;

pub struct TestApp {
    pub ctx: Context,
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, RoutinelySDK, String) {
    let mut ctx = Context::create(Config::new(), Repos::create_inmemory());
    ctx.config.port = 0; // Random port

    let application = Application::new(ctx.clone())
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let app = TestApp { ctx };
    let sdk = RoutinelySDK::new(address.clone());
    (app, sdk, address)
}
