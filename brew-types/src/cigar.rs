use crate::{Cost, CostModel, Pos, Tag};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Write};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CigarElem {
    pub op: Tag,
    pub cnt: usize,
}

/// Run-length encoded list of edits.
#[derive(Clone, Default, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cigar {
    pub ops: Vec<CigarElem>,
}

impl Tag {
    fn cigar_char(&self) -> char {
        match self {
            Tag::Match => '=',
            Tag::Subst => 'X',
            Tag::Ins => 'I',
            Tag::Del => 'D',
        }
    }
}

impl Display for Cigar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for elem in &self.ops {
            write!(f, "{}", elem.cnt)?;
            f.write_char(elem.op.cigar_char())?;
        }
        Ok(())
    }
}

impl Cigar {
    pub fn from_tags(tags: &[Tag]) -> Self {
        let mut cigar = Cigar::default();
        for &op in tags {
            cigar.push_op(op);
        }
        cigar
    }

    pub fn push_op(&mut self, op: Tag) {
        if let Some(s) = self.ops.last_mut() {
            if s.op == op {
                s.cnt += 1;
                return;
            }
        }
        self.ops.push(CigarElem { op, cnt: 1 });
    }

    /// Total number of edit steps.
    pub fn len(&self) -> usize {
        self.ops.iter().map(|e| e.cnt).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn to_tags(&self) -> Vec<Tag> {
        self.ops
            .iter()
            .flat_map(|e| std::iter::repeat(e.op).take(e.cnt))
            .collect()
    }

    /// Walk the path over `a` and `b` and return its total cost.
    ///
    /// Assumes each tag describes the step actually taken, as produced by
    /// strict tagging. Returns `None` when the path leaves the table, does not
    /// end in `(|a|, |b|)`, or labels a mismatch as `MATCH` (or vice versa).
    pub fn cost(&self, cm: &CostModel, a: &[char], b: &[char]) -> Option<Cost> {
        let mut pos = Pos::root();
        let mut cost = 0.;
        for &CigarElem { op, cnt } in &self.ops {
            for _ in 0..cnt {
                let Pos(di, dj) = op.delta();
                let Pos(i, j) = pos;
                cost += match op {
                    Tag::Match => (a.get(i)? == b.get(j)?).then_some(cm.matching)?,
                    Tag::Subst => (a.get(i)? != b.get(j)?).then_some(cm.sub)?,
                    Tag::Ins => b.get(j).map(|_| cm.ins)?,
                    Tag::Del => a.get(i).map(|_| cm.del)?,
                };
                pos = Pos(i + di, j + dj);
            }
        }
        (pos == Pos(a.len(), b.len())).then_some(cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn run_length() {
        let tags = [Tag::Match, Tag::Match, Tag::Subst, Tag::Ins, Tag::Ins];
        let cigar = Cigar::from_tags(&tags);
        assert_eq!(cigar.to_string(), "2=1X2I");
        assert_eq!(cigar.len(), 5);
        assert_eq!(cigar.to_tags(), tags);
    }

    #[test]
    fn replay() {
        let cm = CostModel::unit();
        let cigar = Cigar::from_tags(&[Tag::Del, Tag::Match, Tag::Match, Tag::Match]);
        assert_eq!(cigar.cost(&cm, &text("abcd"), &text("bcd")), Some(1.));
        // Does not reach the end.
        assert_eq!(cigar.cost(&cm, &text("abcde"), &text("bcd")), None);
        // `a` and `b` differ, so this cannot be a match.
        let cigar = Cigar::from_tags(&[Tag::Match]);
        assert_eq!(cigar.cost(&cm, &text("a"), &text("b")), None);
        assert_eq!(Cigar::default().cost(&cm, &[], &[]), Some(0.));
    }
}
