extern crate mst_connector;

use mst_connector::graph::Connection;
use mst_connector::{minimum_cost_kruskal, minimum_cost_prim};
use std::io::{self, BufRead, BufReader};
use std::fs::File;
use std::time::Instant;

const DEMO_CITIES: i32 = 4;
const DEMO_CONNECTIONS: [Connection; 5] = [[1, 2, 3], [2, 3, 4], [3, 4, 5], [1, 4, 10], [2, 4, 6]];

fn invalid_data(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, message)
}

/// Reads `n` from the first line and one `u v cost` triple per following line.
/// Blank lines and `#` comments are skipped.
fn read_graph(path: &str) -> io::Result<(i32, Vec<Connection>)> {
    let reader = BufReader::new(File::open(path)?);
    let mut n = None;
    let mut connections = Vec::new();

    for (line_number, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let numbers = line
            .split_whitespace()
            .map(|token| token.parse::<i32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| invalid_data(format!("line {}: {e}", line_number + 1)))?;

        match (n, numbers.as_slice()) {
            (None, &[count]) => n = Some(count),
            (Some(_), &[u, v, cost]) => connections.push([u, v, cost]),
            _ => {
                return Err(invalid_data(format!(
                    "line {}: unexpected entry {line:?}",
                    line_number + 1
                )))
            }
        }
    }

    let n = n.ok_or_else(|| invalid_data("missing city count".to_string()))?;
    Ok((n, connections))
}

fn main() -> io::Result<()> {
    env_logger::init();

    let (n, connections) = match std::env::args().nth(1) {
        Some(path) => read_graph(&path)?,
        None => (DEMO_CITIES, DEMO_CONNECTIONS.to_vec()),
    };
    log::info!("Connecting {n} cities with {} candidate connections", connections.len());

    let now = Instant::now();
    let kruskal = minimum_cost_kruskal(n, &connections);
    let kruskal_time = now.elapsed();

    let now = Instant::now();
    let prim = minimum_cost_prim(n, &connections);
    let prim_time = now.elapsed();

    println!("{kruskal}");
    println!("{prim}");
    log::info!(
        "Kruskal: {:.6}s, Prim: {:.6}s",
        kruskal_time.as_secs_f64(),
        prim_time.as_secs_f64()
    );
    if kruskal != prim {
        log::error!("Kruskal ({kruskal}) and Prim ({prim}) disagree");
    }
    Ok(())
}
