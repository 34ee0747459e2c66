use petstore_core::*;

// The only changes in here should be start-up chores; routes are mounted in `petstore::build`
#[rocket::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let env = utils::get_release_env();
    let config = utils::rocket_config(&env, utils::get_app_port());
    let db = utils::start_up(&utils::get_db_path(), utils::is_clear_pets())?;
    log::info!("{} is online", APP_NAME);
    let _rocket = petstore::build(config, db).launch().await?;
    Ok(())
}
