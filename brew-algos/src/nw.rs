//! Needleman-Wunsch style DP over the full `(|a|+1) x (|b|+1)` table, with
//! an explicit parent pointer per cell for the traceback.
use brew_types::*;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

/// How cells are labelled once their parent is chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tagging {
    /// Any step that does not increase the cost is reported as `MATCH`.
    ///
    /// This relies on the match weight being the smallest one; with other
    /// weights, e.g. a zero deletion cost, deletions are labelled `MATCH` too.
    #[default]
    Compat,
    /// Label each step by the edge that was taken.
    Strict,
}

/// One cell of the table. `parent` is `None` only at the root.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Cell {
    cost: Cost,
    op: Option<Tag>,
    parent: Option<Pos>,
}

impl Cell {
    const ROOT: Cell = Cell {
        cost: 0.,
        op: None,
        parent: None,
    };
}

/// The minimal cost and the edits on the path reaching it, in order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EditPath {
    pub cost: Cost,
    pub operations: Vec<Tag>,
}

impl EditPath {
    pub fn cigar(&self) -> Cigar {
        Cigar::from_tags(&self.operations)
    }
}

/// Brew edit distance aligner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrewDp {
    /// The cost model to use.
    pub cm: CostModel,
    /// How to label the steps of the path.
    pub tagging: Tagging,
}

/// The filled table, stored row-major in a single allocation.
struct Table {
    cols: usize,
    cells: Vec<Cell>,
}

impl Table {
    #[inline]
    fn idx(&self, Pos(i, j): Pos) -> usize {
        i * self.cols + j
    }

    #[inline]
    fn get(&self, pos: Pos) -> &Cell {
        &self.cells[self.idx(pos)]
    }
}

impl BrewDp {
    pub fn new(cm: CostModel, tagging: Tagging) -> Self {
        BrewDp { cm, tagging }
    }

    /// Only the cost; the table is still filled in full.
    pub fn cost(&self, a: &[char], b: &[char]) -> Cost {
        self.edit_path(a, b).cost
    }

    /// Fill the table and trace back from `(|a|, |b|)` to the root.
    pub fn edit_path(&self, a: &[char], b: &[char]) -> EditPath {
        let table = self.fill(a, b);
        let end = Pos(a.len(), b.len());
        trace!("end {end}: {:?}", table.get(end));
        EditPath {
            cost: table.get(end).cost,
            operations: Self::trace(&table, end),
        }
    }

    fn fill(&self, a: &[char], b: &[char]) -> Table {
        let rows = a.len() + 1;
        let cols = b.len() + 1;
        debug!("Filling {rows}x{cols} table with {:?}", self.cm);
        if !self.cm.match_is_minimal() && self.tagging == Tagging::Compat {
            debug!("Match weight is not minimal; MATCH tags may hide other edits.");
        }
        let mut table = Table {
            cols,
            cells: Vec::with_capacity(rows * cols),
        };

        table.cells.push(Cell::ROOT);
        // Insertions along the top row.
        for j in 1..cols {
            let cost = table.cells[j - 1].cost + self.cm.ins;
            table.cells.push(Cell {
                cost,
                op: Some(Tag::Ins),
                parent: Some(Pos(0, j - 1)),
            });
        }

        for i in 1..rows {
            // Deletions along the left column.
            let cost = table.get(Pos(i - 1, 0)).cost + self.cm.del;
            table.cells.push(Cell {
                cost,
                op: Some(Tag::Del),
                parent: Some(Pos(i - 1, 0)),
            });
            for j in 1..cols {
                let cell = self.best(&table, a, b, Pos(i, j));
                table.cells.push(cell);
            }
        }
        table
    }

    /// Choose the cheapest of the diagonal, insertion, and deletion parents
    /// of `(i, j)`. Ties go to the first of those three.
    fn best(&self, table: &Table, a: &[char], b: &[char], Pos(i, j): Pos) -> Cell {
        let (x, y) = (a[i - 1], b[j - 1]);
        let diag_op = match self.tagging {
            Tagging::Compat => Tag::Subst,
            Tagging::Strict if x == y => Tag::Match,
            Tagging::Strict => Tag::Subst,
        };
        let candidates = [
            (Pos(i - 1, j - 1), self.cm.sub_cost(x, y), diag_op),
            (Pos(i, j - 1), self.cm.ins, Tag::Ins),
            (Pos(i - 1, j), self.cm.del, Tag::Del),
        ];

        let [(parent, step, op), rest @ ..] = candidates;
        let (mut cost, mut op, mut parent) = (table.get(parent).cost + step, op, parent);
        for (p, step, o) in rest {
            let c = table.get(p).cost + step;
            if c < cost {
                (cost, op, parent) = (c, o, p);
            }
        }

        // A step that adds nothing is reported as a match.
        if self.tagging == Tagging::Compat && cost == table.get(parent).cost {
            op = Tag::Match;
        }
        Cell {
            cost,
            op: Some(op),
            parent: Some(parent),
        }
    }

    fn trace(table: &Table, mut pos: Pos) -> Vec<Tag> {
        let mut ops = vec![];
        while let Cell {
            op: Some(op),
            parent: Some(parent),
            ..
        } = *table.get(pos)
        {
            ops.push(op);
            pos = parent;
        }
        debug_assert_eq!(pos, Pos::root());
        ops.reverse();
        ops
    }
}
