use reqwest_middleware::ClientBuilder;

use super::HeaderInjectionMiddleware;

/// Registers `injectors` on `builder` in iteration order.
///
/// Injectors equal to one registered earlier are skipped.
pub fn with_header_injectors(
    mut builder: ClientBuilder,
    injectors: impl IntoIterator<Item = HeaderInjectionMiddleware>,
) -> ClientBuilder {
    for injector in dedup(injectors) {
        builder = builder.with(injector);
    }
    builder
}

fn dedup(
    injectors: impl IntoIterator<Item = HeaderInjectionMiddleware>,
) -> Vec<HeaderInjectionMiddleware> {
    let mut unique: Vec<HeaderInjectionMiddleware> = Vec::new();
    for injector in injectors {
        if unique.contains(&injector) {
            tracing::warn!(header = %injector.key(), "Skipping duplicate header injector");
            continue;
        }
        unique.push(injector);
    }
    unique
}
