//! Browser entry point. Built by trunk with `--features csr`.

fn main() {
    #[cfg(feature = "csr")]
    {
        let config = recipe_client::config::ClientConfig::from_build_env();
        console_error_panic_hook::set_once();
        // Fails only when a logger is already installed.
        let _ = console_log::init_with_level(config.log_level);
        log::info!("recipe client starting; api base {:?}", config.api_base_url);
        leptos::mount::mount_to_body(recipe_client::app::App);
    }
}
