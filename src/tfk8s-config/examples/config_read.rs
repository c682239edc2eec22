use tfk8s_config::ProviderConfig;

fn main() {
    fluvio_future::subscriber::init_tracer(None);
    let config = ProviderConfig::load().expect("Load failed");

    println!("{config:#?}");
    for kind in ["Deployment", "StatefulSet", "ConfigMap"] {
        println!("{kind}: {}", if config.allows(kind) { "enabled" } else { "disabled" });
    }
}
