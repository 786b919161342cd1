use axum::extract::Path;

/// Diagnostic route: echoes the path segment back verbatim. Doubles as a
/// liveness probe.
pub async fn echo(Path(text): Path<String>) -> String {
    text
}
