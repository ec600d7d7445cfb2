//! Chain topology generator.

use std::f64::consts::PI;

use super::random::RandomSource;
use crate::domain::NetworkNode;
use crate::error::Result;

pub const NETWORK_CHAINS: [&str; 8] = [
    "Ethereum", "BSC", "Polygon", "Arbitrum", "Optimism", "Avalanche", "Fantom", "Solana",
];

const PALETTE: [&str; 5] = ["#8B5FBF", "#5F8BBF", "#BF8B5F", "#5FBF8B", "#BF5F8B"];

const RING_RADIUS: f64 = 4.0;

/// Place every chain on a ring with a random height, activity and 2-3 links.
pub fn generate_network_nodes<R>(random: &mut R) -> Result<Vec<NetworkNode>>
where
    R: RandomSource + ?Sized,
{
    let count = NETWORK_CHAINS.len();
    NETWORK_CHAINS
        .iter()
        .enumerate()
        .map(|(i, &name)| -> Result<NetworkNode> {
            let angle = i as f64 * PI * 2.0 / count as f64;
            let z = (random.unit()? - 0.5) * 2.0;
            let links = 2 + random.index(2)?;
            let connections = NETWORK_CHAINS
                .iter()
                .filter(|&&other| other != name)
                .take(links)
                .map(|other| other.to_lowercase())
                .collect();
            let activity = random.uniform(0.2, 0.8)?;

            Ok(NetworkNode {
                id: name.to_lowercase(),
                name: name.to_string(),
                position: [angle.cos() * RING_RADIUS, angle.sin() * RING_RADIUS, z],
                connections,
                activity,
                color: PALETTE[i % PALETTE.len()].to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::RngSource;
    use crate::testkit::random::ScriptedRandom;

    #[test]
    fn nodes_link_to_other_chains_only() {
        let mut random = RngSource::seeded(3);
        let nodes = generate_network_nodes(&mut random).unwrap();
        assert_eq!(nodes.len(), NETWORK_CHAINS.len());

        for node in &nodes {
            assert!(!node.connections.contains(&node.id));
            assert!((2..=3).contains(&node.connections.len()));
            assert!((0.2..1.0).contains(&node.activity));
            assert!((-1.0..1.0).contains(&node.position[2]));
            let radius = node.position[0].hypot(node.position[1]);
            assert!((radius - RING_RADIUS).abs() < 1e-9);
        }
    }

    #[test]
    fn link_count_follows_draw() {
        let mut draws = Vec::new();
        for _ in 0..NETWORK_CHAINS.len() {
            draws.extend([0.5, 0.9, 0.0]);
        }
        let mut random = ScriptedRandom::new(draws);
        let nodes = generate_network_nodes(&mut random).unwrap();

        assert_eq!(nodes[0].connections, ["bsc", "polygon", "arbitrum"]);
        assert_eq!(nodes[1].connections, ["ethereum", "polygon", "arbitrum"]);
        assert_eq!(nodes[0].position[2], 0.0);
        assert_eq!(nodes[0].activity, 0.2);
        assert_eq!(nodes[5].color, "#8B5FBF");
    }
}
