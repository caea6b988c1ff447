#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_files::Files;
    use actix_web::*;
    use catering_site::app::*;
    use catering_site::config::{self, AppConfig};
    use leptos::*;
    use leptos_actix::{generate_route_list, LeptosRoutes};

    // The backend settings are required; refuse to start without them.
    let app_config = match AppConfig::from_process_env() {
        Ok(app_config) => app_config,
        Err(err) => {
            config::report(&err);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, err));
        }
    };

    // Load configuration
    let conf = get_configuration(None)
        .await
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidInput, err.to_string()))?;
    let addr = conf.leptos_options.site_addr;

    let app = {
        let app_config = app_config.clone();
        move || view! { <App config=app_config.clone()/> }
    };

    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(app.clone());
    logging::log!("[SERVER] listening on http://{}", &addr);

    HttpServer::new(move || {
        let leptos_options = &conf.leptos_options;
        let site_root = &leptos_options.site_root;

        App::new()
            // Serve JS/WASM/CSS from `pkg`
            .service(Files::new("/pkg", format!("{site_root}/pkg")))
            // Serve other assets from the `assets` directory
            .service(Files::new("/assets", site_root))
            .service(favicon)
            .leptos_routes(leptos_options.to_owned(), routes.to_owned(), app.clone())
            .app_data(web::Data::new(leptos_options.to_owned()))
    })
    .bind(&addr)?
    .run()
    .await
}

#[cfg(feature = "ssr")]
#[actix_web::get("favicon.ico")]
async fn favicon(
    leptos_options: actix_web::web::Data<leptos::LeptosOptions>,
) -> actix_web::Result<actix_files::NamedFile> {
    let leptos_options = leptos_options.into_inner();
    let site_root = &leptos_options.site_root;
    Ok(actix_files::NamedFile::open(format!(
        "{site_root}/favicon.ico"
    ))?)
}

#[cfg(not(any(feature = "ssr", feature = "csr")))]
pub fn main() {
    // no client-side main function
    // see lib.rs for the hydrate entry point, or the `csr` feature
}

#[cfg(all(not(feature = "ssr"), feature = "csr"))]
pub fn main() {
    // to run: `trunk serve --open --features csr`
    use catering_site::app::*;
    use catering_site::config::{self, AppConfig};
    use leptos::*;

    catering_site::utils::panic_hook::init();

    match AppConfig::from_build_env() {
        Ok(config) => mount_to_body(move || view! { <App config=config.clone()/> }),
        Err(err) => config::report(&err),
    }
}
