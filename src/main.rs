use theftwatch_notifications::application::{self, ApplicationEnv};
use tokio::io::BufReader;

fn main() -> anyhow::Result<()> {
    #[cfg(debug_assertions)]
    {
        // Ignore error because .env file is not required
        // as long as env variables are set
        let _ = dotenvy::dotenv();
    }

    // Parsed before the runtime starts, local offset can't be
    // detected once other threads are running
    let env = ApplicationEnv::parse()?;

    application::setup_tracing(&env)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let result = runtime.block_on(run(env));

    // Blocking stdin read may still be pending after shutdown signal
    runtime.shutdown_background();

    result
}

async fn run(env: ApplicationEnv) -> anyhow::Result<()> {
    let state = application::create_state(&env).await?;

    tracing::info!("reading notification events from stdin");
    let stdin = BufReader::new(tokio::io::stdin());
    tokio::select! {
        result = application::consume_events(state.notifications_service.as_ref(), stdin) => {
            result?;
        }
        _ = application::shutdown_signal() => {}
    }

    let report = application::render_report(&state).await?;
    println!("{report}");

    Ok(())
}
