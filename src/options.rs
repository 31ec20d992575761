use log::LevelFilter;
use slcircular::Value;
use structopt::clap::AppSettings;
use structopt::StructOpt;

const NAME: &str = "slcircular";

const ABOUT: &str = "
slcircular exercises a circular singly-linked list with a sentinel node.
The system pushes the given values, queries membership, predecessors and positions,
pops the head, inserts and erases in the middle of the list, then destroys it.
";

const DEFAULT_VALUES: &[Value] = &[1, 2, 3, 4];
const DEFAULT_INSERTS: &[Value] = &[42, 69];

#[derive(StructOpt)]
#[structopt(
    name = NAME,
    about = ABOUT,
    setting = AppSettings::AllowNegativeNumbers
)]
pub(crate) struct Options {
    #[structopt(
        help = "values pushed onto the list, in order [default: 1 2 3 4]"
    )]
    values: Vec<Value>,

    #[structopt(
        long,
        help = "value held by a node of another list, for the membership check",
        default_value = "6",
        allow_hyphen_values = true
    )]
    pub(crate) outsider: Value,

    #[structopt(
        long,
        number_of_values = 1,
        help = "value inserted in the middle of the list, repeatable [default: 42 69]",
        allow_hyphen_values = true
    )]
    insert: Vec<Value>,

    #[structopt(long, help = "verify list invariants after every step")]
    pub(crate) check: bool,

    #[structopt(short, long, help = "log list structure as well")]
    verbose: bool,

    #[structopt(short, long, help = "only log warnings and errors")]
    quiet: bool,
}

impl Options {
    pub(crate) fn parse() -> Self {
        Self::from_args()
    }

    pub(crate) fn values(&self) -> &[Value] {
        if self.values.is_empty() {
            DEFAULT_VALUES
        } else {
            &self.values
        }
    }

    pub(crate) fn inserts(&self) -> &[Value] {
        if self.insert.is_empty() {
            DEFAULT_INSERTS
        } else {
            &self.insert
        }
    }

    pub(crate) fn level(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::Warn
        } else if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}
