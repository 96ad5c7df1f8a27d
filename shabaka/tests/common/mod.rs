#![allow(dead_code)]

use shabaka::TransactionGraph;
use shabaka::TransactionRecord;

pub fn records(pairs: &[(&str, &str)]) -> Vec<TransactionRecord> {
    pairs.iter().map(|(from, to)| TransactionRecord::new(*from, *to)).collect()
}

pub fn labels(graph: &TransactionGraph) -> Vec<String> {
    graph.nodes().map(|node| node.label.clone()).collect()
}

pub fn link_pairs(graph: &TransactionGraph) -> Vec<(usize, usize)> {
    graph.links().map(|link| (link.source, link.target)).collect()
}

/// A Covalent `transactions_v2` body carrying `pairs` as items
pub fn covalent_body(pairs: &[(&str, Option<&str>)]) -> serde_json::Value {
    let items: Vec<serde_json::Value> = pairs
        .iter()
        .enumerate()
        .map(|(i, (from, to))| {
            serde_json::json!({
                "block_signed_at": "2023-02-01T10:15:30Z",
                "tx_hash": format!("0x{:064x}", i),
                "successful": true,
                "from_address": from,
                "to_address": to,
                "value": "0",
            })
        })
        .collect();

    serde_json::json!({
        "data": {
            "address": pairs.first().map(|(from, _)| *from),
            "chain_id": 80001,
            "items": items,
        },
        "error": false,
        "error_message": null,
        "error_code": null,
    })
}
