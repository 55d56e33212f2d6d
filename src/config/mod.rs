mod defaults;
mod parser;
mod settings;
mod validation;

pub(crate) use settings::CheckConfig;
