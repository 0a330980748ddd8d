use log::{error, info};
use mongodb::{
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client, Collection,
};
use std::sync::Arc;
use std::time::Duration;

pub const DB_NAME: &str = "wanderplan";

pub const USERS: &str = "users";
pub const TRIPS: &str = "trips";
pub const DESTINATIONS: &str = "destinations";
pub const ACTIVITIES: &str = "activities";
pub const ITINERARIES: &str = "itineraries";
pub const UPLOADS: &str = "uploads";

pub fn collection<T: Send + Sync>(client: &Client, name: &str) -> Collection<T> {
    client.database(DB_NAME).collection(name)
}

pub async fn create_mongo_client(uri: &str) -> Arc<Client> {
    info!("Connecting to MongoDB");

    let mut client_options = ClientOptions::parse(uri)
        .await
        .expect("MongoDB URI may be incorrect! Failed to parse.");

    client_options.connect_timeout = Some(Duration::from_secs(10));
    client_options.server_selection_timeout = Some(Duration::from_secs(10));
    client_options.max_pool_size = Some(10);
    client_options.min_pool_size = Some(1);

    // Pin the server API for MongoDB 5.0+
    let server_api = ServerApi::builder().version(ServerApiVersion::V1).build();
    client_options.server_api = Some(server_api);

    let client =
        Client::with_options(client_options).expect("Failed to create MongoDB client with options");

    // Verify connectivity up front so misconfiguration shows at startup
    match client
        .database(DB_NAME)
        .run_command(mongodb::bson::doc! {"ping": 1})
        .await
    {
        Ok(_) => info!("Successfully connected to MongoDB and verified with ping command"),
        Err(e) => {
            error!("Connected to MongoDB but ping test failed: {}", e);
            error!("The API may still work, but some functionality might be impaired");
        }
    }

    Arc::new(client)
}
