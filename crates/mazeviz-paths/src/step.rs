use mazeviz_core::{CellKind, Coord, Grid, GridError};

/// What a [`StepEvent`] reports about its coordinate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepKind {
    /// The search expanded this cell.
    Explored,
    /// This cell lies on the reconstructed path.
    PathSegment,
}

/// One incremental visualization update.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepEvent {
    pub coord: Coord,
    pub kind: StepKind,
}

impl StepEvent {
    #[inline]
    pub const fn explored(coord: Coord) -> Self {
        Self {
            coord,
            kind: StepKind::Explored,
        }
    }

    #[inline]
    pub const fn path(coord: Coord) -> Self {
        Self {
            coord,
            kind: StepKind::PathSegment,
        }
    }

    /// The annotation a caller paints for this event.
    #[inline]
    pub const fn cell_kind(&self) -> CellKind {
        match self.kind {
            StepKind::Explored => CellKind::Explored,
            StepKind::PathSegment => CellKind::Path,
        }
    }

    /// Paint the event onto a caller-owned grid.
    ///
    /// Start, End and Wall cells are left alone so the terminals stay
    /// visible. Fails only if the coordinate is outside `grid`.
    pub fn paint(&self, grid: &mut Grid) -> Result<(), GridError> {
        match grid.at(self.coord) {
            Some(CellKind::Start | CellKind::End | CellKind::Wall) => Ok(()),
            _ => grid.set(self.coord, self.cell_kind()),
        }
    }
}

/// Terminal outcome of a search.
///
/// `steps` counts every event emitted (Explored and PathSegment alike), not
/// just the path length.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    pub found: bool,
    pub steps: usize,
}
