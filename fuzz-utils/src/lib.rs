use arbitrary::{Arbitrary, Unstructured};
use hyperion::mock::Mock;
use hyperion::range::{EndBound, StartBound};
use hyperion::{Error, PositionalTree};
use rand::{rngs::StdRng, SeedableRng};
use std::fmt::{self, Debug, Display, Formatter};
use std::panic::{self, RefUnwindSafe, UnwindSafe};

fn expect_might_panic<R, F: UnwindSafe + FnOnce() -> R>(f: F) -> Result<R, ()> {
    // set a custom hook that does nothing, so we don't print panic information every time the mock
    // implementation panics
    panic::set_hook(Box::new(|_| {}));

    let result = panic::catch_unwind(f).map_err(|_| ());

    // remove our custom hook
    let _ = panic::take_hook();

    result
}

/// Seed for the RNG used to build trees
///
/// The shape of a tree never changes its contents, so a fixed seed loses nothing -- and it means
/// the printed test cases reproduce exactly.
pub const RNG_SEED: u64 = 0;

const VARIANTS: u8 = 7;

/// A single operation on one of the trees, along with its expected outcome
#[derive(Clone)]
pub enum Command<T> {
    Build {
        id: TreeId,
        values: Vec<T>,
    },
    MoveRangeToFront {
        id: TreeId,
        left: usize,
        right: usize,
        result: Result<(), Error>,
    },
    MoveToFront {
        id: TreeId,
        start: StartBound<usize>,
        end: EndBound<usize>,
        result: Result<(), Error>,
    },
    Get {
        id: TreeId,
        position: usize,
        value: Option<T>,
    },
    /// Splits `id`, keeping the left half in `id` and putting the right half in `new_id`
    Split {
        id: TreeId,
        position: usize,
        new_id: TreeId,
        panics: bool,
    },
    /// Merges `rhs` onto the end of `lhs`, consuming `rhs`
    Merge {
        lhs: TreeId,
        rhs: TreeId,
    },
    Check {
        id: TreeId,
        sequence: Vec<T>,
    },
}

#[derive(Debug, Copy, Clone, Arbitrary)]
pub struct TreeId(usize);

impl Display for TreeId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// Sequence of [`Command`]s
pub struct CommandSequence<C> {
    pub cmds: Vec<C>,
}

impl<C: Debug> Debug for CommandSequence<C> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let init_id = TreeId(0);
        f.write_str("#[test]\n")?;
        f.write_str("fn test_case() {\n")?;
        writeln!(f, "    let mut rng = StdRng::seed_from_u64({RNG_SEED});")?;
        writeln!(f, "    let mut tree_{init_id} = PositionalTree::new_empty();")?;
        for c in &self.cmds {
            c.fmt(f)?;
        }
        f.write_str("}")
    }
}

fn fmt_result(result: &Result<(), Error>) -> String {
    match result {
        Ok(()) => "Ok(())".to_owned(),
        Err(e) => format!("Err(Error::{e:?})"),
    }
}

impl<T: Debug> Debug for Command<T> {
    #[rustfmt::skip]
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Build { id, values } => {
                writeln!(f, "    let mut tree_{id} = PositionalTree::build_with_rng({values:?}, &mut rng);")
            }
            Self::MoveRangeToFront { id, left, right, result } => {
                let result = fmt_result(result);
                writeln!(f, "    assert_eq!(tree_{id}.move_range_to_front({left}, {right}), {result});")
            }
            Self::MoveToFront { id, start, end, result } => {
                let start_fmt = match start {
                    StartBound::Unbounded => String::new(),
                    StartBound::Included(i) => format!("{i}"),
                };
                let end_fmt = match end {
                    EndBound::Unbounded => String::new(),
                    EndBound::Included(i) => format!("={i}"),
                    EndBound::Excluded(i) => format!("{i}"),
                };

                let result = fmt_result(result);
                writeln!(f, "    assert_eq!(tree_{id}.move_to_front({start_fmt}..{end_fmt}), {result});")
            }
            Self::Get { id, position, value } => {
                writeln!(f, "    assert_eq!(tree_{id}.get({position}).cloned(), {value:?});")
            }
            Self::Split { id, position, new_id, panics: false } => {
                writeln!(f, "    let (mut tree_{id}, mut tree_{new_id}) = tree_{id}.split({position});")
            }
            Self::Split { id, position, new_id: _, panics: true } => {
                f.write_str("    assert!(std::panic::catch_unwind(move || {\n")?;
                writeln!(f, "        tree_{id}.split({position})")?;
                f.write_str("    }).is_err());\n")
            }
            Self::Merge { lhs, rhs } => {
                writeln!(f, "    let mut tree_{lhs} = PositionalTree::merge(tree_{lhs}, tree_{rhs});")
            }
            Self::Check { id, sequence } => {
                writeln!(f, "    tree_{id}.validate();")?;
                writeln!(f, "    assert_eq!(tree_{id}.to_sequence(), {sequence:?});")
            }
        }
    }
}

impl<C> CommandSequence<C> {
    pub fn map<D, F: FnMut(C) -> D>(self, f: F) -> CommandSequence<D> {
        CommandSequence {
            cmds: self.cmds.into_iter().map(f).collect(),
        }
    }
}

impl<T> Command<T> {
    #[rustfmt::skip]
    pub fn map_value<U, F: FnMut(T) -> U>(self, mut f: F) -> Command<U> {
        match self {
            Self::Build { id, values } => Command::Build {
                id,
                values: values.into_iter().map(&mut f).collect(),
            },
            Self::MoveRangeToFront { id, left, right, result } => {
                Command::MoveRangeToFront { id, left, right, result }
            }
            Self::MoveToFront { id, start, end, result } => {
                Command::MoveToFront { id, start, end, result }
            }
            Self::Get { id, position, value } => Command::Get {
                id,
                position,
                value: value.map(f),
            },
            Self::Split { id, position, new_id, panics } => {
                Command::Split { id, position, new_id, panics }
            }
            Self::Merge { lhs, rhs } => Command::Merge { lhs, rhs },
            Self::Check { id, sequence } => Command::Check {
                id,
                sequence: sequence.into_iter().map(f).collect(),
            },
        }
    }
}

impl<'d, T> Arbitrary<'d> for CommandSequence<Command<T>>
where
    T: Arbitrary<'d> + UnwindSafe + RefUnwindSafe + Clone,
{
    fn arbitrary(u: &mut Unstructured<'d>) -> arbitrary::Result<Self> {
        let mut cmds = Vec::new();

        let mut mocks = vec![Some(Mock::new_empty())];
        let mut num_trees = 1;

        while !u.is_empty() && num_trees != 0 {
            let id = TreeId(choose_sparse_index(u, num_trees, &mocks)?);
            let variant = u.int_in_range(0..=VARIANTS - 1)?;
            cmds.push(Command::arbitrary(u, variant, id, &mut num_trees, &mut mocks)?);
        }

        Ok(CommandSequence { cmds })
    }
}

fn choose_sparse_index<T>(
    u: &mut Unstructured,
    count: usize,
    vals: &[Option<T>],
) -> arbitrary::Result<usize> {
    let mut idx = u.choose_index(count)?;
    let mut i = 0;
    while i <= idx {
        if vals[i].is_none() {
            idx += 1;
        }
        i += 1;
    }
    Ok(idx)
}

// Positions are drawn from slightly past the end of the tree, so that out-of-bounds requests show
// up regularly without drowning out the valid ones.
fn position_near(u: &mut Unstructured, len: usize) -> arbitrary::Result<usize> {
    u.int_in_range(0..=len + 1)
}

impl<'d, T> Command<T>
where
    T: Arbitrary<'d> + UnwindSafe + RefUnwindSafe + Clone,
{
    /// Creates a new command and executes it on the provided mock trees
    fn arbitrary(
        u: &mut Unstructured<'d>,
        variant: u8,
        id: TreeId,
        count: &mut usize,
        mocks: &mut Vec<Option<Mock<T>>>,
    ) -> arbitrary::Result<Self> {
        let len = mocks[id.0].as_ref().map(Mock::len).unwrap_or(0);

        match variant {
            // build
            0 => {
                let values: Vec<T> = u.arbitrary()?;
                let new_id = TreeId(mocks.len());
                mocks.push(Some(Mock::build(values.iter().cloned())));
                *count += 1;
                Ok(Self::Build { id: new_id, values })
            }
            // move_range_to_front
            1 => {
                let mock = mocks[id.0].as_mut().unwrap();
                let left = position_near(u, len)?;
                let right = position_near(u, len)?;
                let result = mock.move_range_to_front(left, right);
                Ok(Self::MoveRangeToFront { id, left, right, result })
            }
            // move_to_front
            2 => {
                let mock = mocks[id.0].as_mut().unwrap();
                let start = match u.arbitrary::<bool>()? {
                    true => StartBound::Included(position_near(u, len)?),
                    false => StartBound::Unbounded,
                };
                let end = match u.int_in_range(0..=2_u8)? {
                    0 => EndBound::Included(position_near(u, len)?),
                    1 => EndBound::Excluded(position_near(u, len)?),
                    _ => EndBound::Unbounded,
                };
                let result = mock.move_to_front((start, end));
                Ok(Self::MoveToFront { id, start, end, result })
            }
            // get
            3 => {
                let mock = mocks[id.0].as_ref().unwrap();
                let position = position_near(u, len)?;
                let value = mock.get(position).cloned();
                Ok(Self::Get { id, position, value })
            }
            // split
            4 => {
                let mock = mocks[id.0].take().unwrap();
                *count -= 1;

                let position = position_near(u, len)?;
                let new_id = TreeId(mocks.len());

                match expect_might_panic(move || mock.split(position)) {
                    Ok((lhs, rhs)) => {
                        mocks[id.0] = Some(lhs);
                        mocks.push(Some(rhs));
                        *count += 2;
                        Ok(Self::Split { id, position, new_id, panics: false })
                    }
                    Err(()) => Ok(Self::Split { id, position, new_id, panics: true }),
                }
            }
            // merge, if there's something to merge with
            5 if *count >= 2 => {
                let lhs = mocks[id.0].take().unwrap();
                *count -= 1;
                let rhs_id = TreeId(choose_sparse_index(u, *count, mocks)?);
                let rhs = mocks[rhs_id.0].take().unwrap();
                mocks[id.0] = Some(Mock::merge(lhs, rhs));
                Ok(Self::Merge { lhs: id, rhs: rhs_id })
            }
            // check
            5 | 6 => {
                let mock = mocks[id.0].as_ref().unwrap();
                Ok(Self::Check { id, sequence: mock.to_sequence() })
            }
            _ => unreachable!("bad Command variant {variant}"),
        }
    }
}

/// The real trees, driven by a sequence of [`Command`]s
pub struct RunnerState<T> {
    trees: Vec<Option<PositionalTree<T>>>,
    rng: StdRng,
}

impl<T> RunnerState<T>
where
    T: UnwindSafe + RefUnwindSafe + Debug + Clone + PartialEq,
{
    /// Creates a new, blank `RunnerState` to run a series of commands
    pub fn init() -> Self {
        RunnerState {
            trees: vec![Some(PositionalTree::new_empty())],
            rng: StdRng::seed_from_u64(RNG_SEED),
        }
    }

    /// Runs the command, panicking if the outcome differs from what the mock produced
    #[rustfmt::skip]
    pub fn run_cmd(&mut self, cmd: &Command<T>) {
        match cmd {
            Command::Build { id, values } => {
                let tree = PositionalTree::build_with_rng(values.iter().cloned(), &mut self.rng);
                tree.validate();
                assert_eq!(id.0, self.trees.len());
                self.trees.push(Some(tree));
            }
            Command::MoveRangeToFront { id, left, right, result } => {
                let tree = self.trees[id.0].as_mut().unwrap();
                assert_eq!(&tree.move_range_to_front(*left, *right), result);
                tree.validate();
            }
            Command::MoveToFront { id, start, end, result } => {
                let tree = self.trees[id.0].as_mut().unwrap();
                assert_eq!(&tree.move_to_front((*start, *end)), result);
                tree.validate();
            }
            Command::Get { id, position, value } => {
                let tree = self.trees[id.0].as_ref().unwrap();
                assert_eq!(tree.get(*position), value.as_ref());
            }
            Command::Split { id, position, new_id, panics: false } => {
                let tree = self.trees[id.0].take().unwrap();
                let (lhs, rhs) = tree.split(*position);
                lhs.validate();
                rhs.validate();
                self.trees[id.0] = Some(lhs);
                assert_eq!(new_id.0, self.trees.len());
                self.trees.push(Some(rhs));
            }
            Command::Split { id, position, new_id: _, panics: true } => {
                let tree = self.trees[id.0].take().unwrap();
                let position = *position;
                let panicked = expect_might_panic(move || {
                    tree.split(position);
                })
                .is_err();

                assert!(panicked);
            }
            Command::Merge { lhs, rhs } => {
                let l = self.trees[lhs.0].take().unwrap();
                let r = self.trees[rhs.0].take().unwrap();
                let merged = PositionalTree::merge(l, r);
                merged.validate();
                self.trees[lhs.0] = Some(merged);
            }
            Command::Check { id, sequence } => {
                let tree = self.trees[id.0].as_ref().unwrap();
                tree.validate();
                assert_eq!(tree.len(), sequence.len());
                assert_eq!(&tree.to_sequence(), sequence);
            }
        }
    }
}
