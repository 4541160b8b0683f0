use std::{
    env,
    fmt::{Display, Formatter, Result},
    str::FromStr,
};

const RUST_ENV_KEY: &str = "RUST_ENV";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Local,
    Dev,
    Staging,
    Prod,
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let printable = match *self {
            Environment::Local => "local",
            Environment::Dev => "develop",
            Environment::Staging => "staging",
            Environment::Prod => "prod",
        };
        write!(f, "{}", printable)
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "production" | "prod" | "PRODUCTION" | "PROD" => Ok(Environment::Prod),
            "staging" | "stg" | "STAGING" | "STG" => Ok(Environment::Staging),
            "develop" | "DEVELOP" | "dev" | "DEV" => Ok(Environment::Dev),
            _ => Ok(Environment::Local),
        }
    }
}

impl Environment {
    pub fn from_rust_env() -> Environment {
        env::var(RUST_ENV_KEY)
            .unwrap_or_default()
            .parse()
            .unwrap_or_default()
    }

    pub fn is_local(&self) -> bool {
        self == &Environment::Local
    }

    pub fn is_prod(&self) -> bool {
        self == &Environment::Prod
    }
}
