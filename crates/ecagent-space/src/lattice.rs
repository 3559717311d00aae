//! The generic lattice environment: construction, placement, queries and
//! model rebinding.

use crate::config::LatticeConfig;
use crate::error::{AddAgentError, LatticeError, PlacementError};
use crate::extents::Extents;
use ecagent_core::{
    Agent, AgentId, Coord, Environment, ModelId, Position, DEFAULT_ENVIRONMENT_ID,
};

/// A discrete environment with `D` axes (1, 2 or 3).
///
/// The lattice owns one static cell agent per coordinate, created at
/// construction with identifier `CELL_<index>` and a [`Position`]. Dynamic
/// agents are moved into the underlying [`Environment`] registry by
/// [`add_agent`](Self::add_agent) and handed back by
/// [`remove_agent`](Self::remove_agent).
///
/// # Examples
///
/// ```
/// use ecagent_core::{Agent, ModelId};
/// use ecagent_space::GridWorld;
///
/// let model = ModelId(1);
/// let mut world = GridWorld::new([3, 3], model).unwrap();
/// world.add_agent(Agent::new("rabbit", model), [2, 1]).unwrap();
///
/// let here: Vec<_> = world.agents_at(&[2, 1]).iter().map(|a| a.id().to_string()).collect();
/// assert_eq!(here, ["rabbit"]);
/// assert!(world.agents_at(&[0, 0]).is_empty());
/// assert!(world.cell(&[2, 2]).is_some());
/// assert!(world.cell(&[3, 0]).is_none());
/// ```
#[derive(Debug)]
pub struct Lattice<const D: usize> {
    env: Environment,
    extents: Extents<D>,
    /// Dense cell arena indexed by [`Extents::linear_address`].
    cells: Vec<Agent>,
}

/// A 1-axis lattice (`width`).
pub type LineWorld = Lattice<1>;
/// A 2-axis lattice (`width`, `height`).
pub type GridWorld = Lattice<2>;
/// A 3-axis lattice (`width`, `height`, `depth`).
pub type CubeWorld = Lattice<3>;

impl<const D: usize> Lattice<D> {
    /// Create a lattice with the default `"ENVIRONMENT"` identifier.
    ///
    /// Returns `Err(LatticeError::InvalidExtent)` if any extent is zero.
    pub fn new(extents: [u32; D], model: ModelId) -> Result<Self, LatticeError> {
        Self::with_id(extents, model, DEFAULT_ENVIRONMENT_ID)
    }

    /// Create a lattice with an explicit environment identifier.
    pub fn with_id(
        extents: [u32; D],
        model: ModelId,
        id: impl Into<String>,
    ) -> Result<Self, LatticeError> {
        let extents = Extents::new(extents)?;
        let env = Environment::with_id(model, id);
        let cells: Vec<Agent> = extents
            .coords()
            .enumerate()
            .map(|(index, coord)| {
                let mut cell = Agent::new(AgentId::cell(index), model);
                cell.add_component(Position::from_coord(&coord));
                cell
            })
            .collect();
        tracing::debug!(
            environment = env.id(),
            extents = ?extents.sizes(),
            cells = cells.len(),
            "lattice constructed"
        );
        Ok(Self {
            env,
            extents,
            cells,
        })
    }

    /// Create a lattice from a [`LatticeConfig`].
    pub fn from_config(config: LatticeConfig<D>, model: ModelId) -> Result<Self, LatticeError> {
        Self::with_id(config.extents, model, config.id)
    }

    // ── Placement ───────────────────────────────────────────────

    /// Place `agent` at `coord` and register it.
    ///
    /// The agent receives a [`Position`] before it becomes visible in the
    /// registry. On rejection nothing changes: the error hands back the
    /// agent exactly as it was passed in.
    pub fn add_agent(&mut self, mut agent: Agent, coord: Coord<D>) -> Result<(), AddAgentError> {
        if !self.extents.contains(&coord) {
            let reason = PlacementError::OutOfBounds {
                coord: coord.to_vec(),
                bounds: self.extents.describe_bounds(),
            };
            tracing::debug!(agent = %agent.id(), %reason, "placement rejected");
            return Err(AddAgentError::new(reason, agent));
        }

        let previous = agent.add_component(Position::from_coord(&coord));
        if let Err(mut agent) = self.env.add_agent(agent) {
            // Registration only fails on a duplicate id; restore the agent.
            match previous {
                Some(position) => agent.add_component(position),
                None => agent.remove_component::<Position>(),
            };
            let reason = PlacementError::DuplicateAgent {
                id: agent.id().clone(),
            };
            tracing::debug!(agent = %agent.id(), %reason, "placement rejected");
            return Err(AddAgentError::new(reason, agent));
        }
        tracing::trace!(environment = self.env.id(), ?coord, "agent placed");
        Ok(())
    }

    /// Detach the agent's [`Position`], deregister it and hand it back.
    ///
    /// Unknown identifiers are ignored, so removal is idempotent.
    pub fn remove_agent(&mut self, id: &AgentId) -> Option<Agent> {
        if let Some(agent) = self.env.agent_mut(id) {
            agent.remove_component::<Position>();
        }
        self.env.remove_agent(id)
    }

    // ── Queries ─────────────────────────────────────────────────

    /// Registered agents positioned at `coord`, in registry order.
    ///
    /// Does not check bounds: an out-of-range coordinate matches nothing.
    /// Scans every registered agent.
    pub fn agents_at(&self, coord: &Coord<D>) -> Vec<&Agent> {
        self.env
            .agents()
            .filter(|agent| agent.position().is_some_and(|p| p.is_at(coord)))
            .collect()
    }

    /// Identifiers of the agents at `coord`.
    ///
    /// The result is an owned snapshot, so the lattice may be mutated while
    /// iterating it.
    pub fn agent_ids_at(&self, coord: &Coord<D>) -> Vec<AgentId> {
        self.agents_at(coord)
            .into_iter()
            .map(|agent| agent.id().clone())
            .collect()
    }

    /// The static cell at `coord`, or `None` if any axis is out of range.
    pub fn cell(&self, coord: &Coord<D>) -> Option<&Agent> {
        self.extents
            .linear_address(coord)
            .and_then(|index| self.cells.get(index))
    }

    /// The static cell at `coord`, for updating its components.
    ///
    /// The cell's [`Position`] must be left in place and unchanged;
    /// [`cell`](Self::cell) relies on it matching the arena index.
    pub fn cell_mut(&mut self, coord: &Coord<D>) -> Option<&mut Agent> {
        self.extents
            .linear_address(coord)
            .and_then(|index| self.cells.get_mut(index))
    }

    /// The static cell at arena index `index`.
    pub fn cell_at_index(&self, index: usize) -> Option<&Agent> {
        self.cells.get(index)
    }

    /// All static cells in construction (arena) order.
    pub fn cells(&self) -> impl Iterator<Item = &Agent> + '_ {
        self.cells.iter()
    }

    /// Number of static cells, the product of the extents.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// The lattice extents, ordered `width`, `height`, `depth`.
    pub fn dimensions(&self) -> [u32; D] {
        self.extents.sizes()
    }

    /// The validated extents and addressing function.
    pub fn extents(&self) -> &Extents<D> {
        &self.extents
    }

    /// Arena index of `coord`.
    pub fn linear_address(&self, coord: &Coord<D>) -> Option<usize> {
        self.extents.linear_address(coord)
    }

    /// Coordinate of the cell at arena index `index`.
    pub fn coord_of(&self, index: usize) -> Option<Coord<D>> {
        self.extents.coord_of(index)
    }

    /// Whether `coord` lies on the lattice.
    pub fn contains(&self, coord: &Coord<D>) -> bool {
        self.extents.contains(coord)
    }

    /// A registered dynamic agent.
    pub fn agent(&self, id: &AgentId) -> Option<&Agent> {
        self.env.agent(id)
    }

    /// A registered dynamic agent, for updating its components in place.
    ///
    /// Registry order is unaffected. The agent's [`Position`] must not be
    /// detached or moved; the lattice has no relocation primitive, so
    /// relocate with [`remove_agent`](Self::remove_agent) and
    /// [`add_agent`](Self::add_agent).
    pub fn agent_mut(&mut self, id: &AgentId) -> Option<&mut Agent> {
        self.env.agent_mut(id)
    }

    /// Number of registered dynamic agents.
    pub fn agent_count(&self) -> usize {
        self.env.len()
    }

    /// The underlying agent registry.
    pub fn environment(&self) -> &Environment {
        &self.env
    }

    /// The environment identifier.
    pub fn id(&self) -> &str {
        self.env.id()
    }

    /// The owning model.
    pub fn model(&self) -> ModelId {
        self.env.model()
    }

    // ── Cells and rebinding ─────────────────────────────────────

    /// Apply `generator` once to every static cell, in arena order.
    ///
    /// Typically used to attach a per-cell component such as terrain or
    /// resources. Generators must leave the cell's [`Position`] alone.
    pub fn add_cell_component(&mut self, mut generator: impl FnMut(&mut Agent)) {
        for cell in &mut self.cells {
            generator(cell);
        }
    }

    /// Move the lattice and all its cells to `model`.
    ///
    /// Each cell's [`Position`] is torn down and rebuilt under the new
    /// model from the cell's arena index, so the coordinate is the one
    /// assigned at construction. Registered dynamic agents are not touched.
    pub fn set_model(&mut self, model: ModelId) {
        self.env.set_model(model);
        for (index, cell) in self.cells.iter_mut().enumerate() {
            // The arena index is authoritative for a cell's coordinate.
            let position = Position::from_coord(&self.extents.unrank(index));
            cell.remove_component::<Position>();
            cell.set_model(model);
            cell.add_component(position);
        }
        tracing::debug!(environment = self.env.id(), %model, "lattice rebound to model");
    }
}
