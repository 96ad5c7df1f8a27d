// ─────────────────────────────────────────────────────────────────────────────
//  Shabaka: Transaction Web
//
//  Shabaka (شبكة): "The Web". Draws who paid whom. Fetches the latest page of
//  transactions for an address and emits the address graph a force-directed
//  renderer lays out and paints.
// ─────────────────────────────────────────────────────────────────────────────

use shabaka::engine::Explorer;
use shabaka::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    Explorer::run().await?;
    Ok(())
}
