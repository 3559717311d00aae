//! Benchmark profiles for ECAgent lattice environments.
//!
//! - [`reference_profile`]: 100x100 grid (10K cells) with 1K agents
//! - [`stress_profile`]: 316x316 grid (~100K cells) with 10K agents
//! - [`init_agent_indices`]: deterministic agent placement via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use ecagent_core::{Agent, ModelId};
use ecagent_space::GridWorld;

/// 100x100 grid with 1,000 agents placed deterministically from `seed`.
pub fn reference_profile(seed: u64) -> GridWorld {
    populated_grid(100, 100, 1_000, seed)
}

/// 316x316 grid with 10,000 agents placed deterministically from `seed`.
pub fn stress_profile(seed: u64) -> GridWorld {
    populated_grid(316, 316, 10_000, seed)
}

/// Build a `width x height` grid holding `agents` agents named
/// `agent_<n>`. Several agents may share a cell.
pub fn populated_grid(width: u32, height: u32, agents: usize, seed: u64) -> GridWorld {
    let model = ModelId(seed);
    let mut world =
        GridWorld::new([width, height], model).expect("benchmark extents are non-zero");
    for (i, index) in init_agent_indices(world.cell_count(), agents, seed)
        .into_iter()
        .enumerate()
    {
        let coord = world.coord_of(index).expect("index below cell_count");
        world
            .add_agent(Agent::new(format!("agent_{i}"), model), coord)
            .expect("generated coordinates are in bounds");
    }
    world
}

/// Generate `n` deterministic arena indices in `0..cell_count`.
///
/// Uses a multiplicative hash of the seed; indices may repeat. Returns an
/// empty list when `cell_count` is zero.
pub fn init_agent_indices(cell_count: usize, n: usize, seed: u64) -> Vec<usize> {
    if cell_count == 0 {
        return Vec::new();
    }
    (0..n as u64)
        .map(|i| {
            (seed
                .wrapping_mul(6364136223846793005)
                .wrapping_add(i.wrapping_mul(1442695040888963407))
                % cell_count as u64) as usize
        })
        .collect()
}
