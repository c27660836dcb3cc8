use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "ssr")] {
        use dotenv::dotenv;
        use env_logger::Env;

        #[tokio::main]
        async fn main() {
            dotenv().ok();
            env_logger::init_from_env(Env::default().default_filter_or("info"));

            if let Err(e) = league_theory_crafter::server::run().await {
                log::error!("{e}");
                std::process::exit(1);
            }
        }
    } else {
        pub fn main() {
            // no client-side main function
            // see lib.rs for hydration function instead
        }
    }
}
