use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "ssr")] {
        use axum::extract::FromRef;
        use leptos::prelude::LeptosOptions;

        #[derive(FromRef, Clone, Debug)]
        pub struct AppState {
            pub leptos_options: LeptosOptions,
        }

        impl AppState {
            pub fn new(leptos_options: LeptosOptions) -> Self {
                Self { leptos_options }
            }
        }
    }
}
