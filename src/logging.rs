use tracing_subscriber::EnvFilter;

/// Inicializa el subscriber de `tracing` una sola vez por proceso.
///
/// Usa `RUST_LOG` si está definido; si no, `filtro_por_defecto`. Escribe a
/// stderr para que stdout quede libre para la salida JSON.
pub fn init_tracing_subscriber(filtro_por_defecto: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filtro_por_defecto));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}
