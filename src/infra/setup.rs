use crate::{
    adapters::{
        email::resend::ResendEmailSender, http::app_state::AppState,
        record_sync::airtable::AirtableRecordSync,
    },
    application::email_templates::StaticWelcomeTemplate,
    infra::{config::AppConfig, postgres_persistence},
    use_cases::waitlist::{WaitlistRepo, WaitlistUseCases},
};
use std::fs::File;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let config = AppConfig::from_env();

    let postgres_arc = Arc::new(postgres_persistence(&config.database_url).await?);

    let record_sync = Arc::new(AirtableRecordSync::new(
        &config.airtable_api_url,
        config.airtable_api_key.clone(),
        &config.airtable_base_id,
        &config.airtable_table_name,
    )?);

    let email = Arc::new(ResendEmailSender::new(
        &config.resend_api_url,
        config.resend_api_key.clone(),
        config.email_from.clone(),
    )?);

    tracing::info!(
        notification_failure_policy = %config.notification_failure_policy,
        "Waitlist workflow configured"
    );

    let waitlist_use_cases = WaitlistUseCases::new(
        postgres_arc as Arc<dyn WaitlistRepo>,
        record_sync,
        email,
        Arc::new(StaticWelcomeTemplate),
        config.notification_failure_policy,
    );

    Ok(AppState {
        config: Arc::new(config),
        waitlist_use_cases: Arc::new(waitlist_use_cases),
    })
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "waitlist=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .pretty();

    // File (structured JSON logs), skipped when app.log can't be created
    let json_layer = File::create("app.log").ok().map(|file| {
        fmt::layer()
            .json()
            .with_writer(file)
            .with_current_span(true)
            .with_span_list(true)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();
}
