use dotenvy::dotenv;
use std::env;

pub struct Config {
    pub port: u16,
    pub table_name: String,
}

impl Config {
    pub fn from_env() -> Self {
        let _ = dotenv().is_ok();

        let port = env::var("PORT")
            .expect("PORT missing, it is required")
            .parse()
            .expect("PORT must be a valid u16 number");

        let table_name = env::var("TABLE_NAME").expect("TABLE_NAME missing, it is required");

        Self { port, table_name }
    }

    pub fn addr(&self) -> String {
        format!("127.0.0.1:{}", self.port)
    }
}
