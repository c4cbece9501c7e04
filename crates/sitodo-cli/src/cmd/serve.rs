use sitodo_core::config::WarnLevel;
use std::path::Path;
use std::sync::Arc;

pub fn run(root: &Path, port: Option<u16>, open_browser: bool) -> anyhow::Result<()> {
    let (config, service) = super::open_service(root)?;
    let port = port.unwrap_or(config.server.port);

    for w in config.validate() {
        match w.level {
            WarnLevel::Warning => tracing::warn!("config: {}", w.message),
            WarnLevel::Error => tracing::error!("config: {}", w.message),
        }
    }

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(sitodo_server::serve(Arc::new(service), port, open_browser))
}
