pub mod model;
mod orm;
mod schema;

pub use orm::OrmRepo;
pub use schema::create_tables;

use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    pub async fn new(url: &str) -> anyhow::Result<Self> {
        let connection = sea_orm::Database::connect(url).await?;
        Ok(Database { connection })
    }

    pub fn get_connection(&self) -> &DatabaseConnection {
        &self.connection
    }
}
