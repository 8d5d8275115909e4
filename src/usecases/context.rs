use crate::{
    infra::{config::AppConfig, contracts::SettingsStore},
    usecases::dispatch::OutboundDispatcher,
};

pub struct AppContext {
    pub config: AppConfig,
    pub settings: Box<dyn SettingsStore>,
    pub dispatcher: OutboundDispatcher,
}

impl AppContext {
    pub fn new(config: AppConfig, settings: Box<dyn SettingsStore>) -> Self {
        let dispatcher = OutboundDispatcher::new(config.dispatch.clone());
        Self {
            config,
            settings,
            dispatcher,
        }
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("config", &self.config)
            .field("dispatcher", &self.dispatcher)
            .finish_non_exhaustive()
    }
}
