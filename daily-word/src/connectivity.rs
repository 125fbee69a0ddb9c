use std::time::Duration;

use tokio::net::TcpStream;

const PROBE_ADDR: &str = "api.dictionaryapi.dev:443";
const PROBE_DEADLINE: Duration = Duration::from_secs(3);

/// Reachability check against the dictionary api host. Any failure to resolve
/// or connect within the deadline counts as offline.
pub async fn is_connected() -> bool {
    match tokio::time::timeout(PROBE_DEADLINE, TcpStream::connect(PROBE_ADDR)).await {
        Ok(Ok(_)) => true,
        Ok(Err(error)) => {
            tracing::debug!("connectivity probe failed: {error}");
            false
        }
        Err(_) => {
            tracing::debug!("connectivity probe timed out");
            false
        }
    }
}
