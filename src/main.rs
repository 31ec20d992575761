mod options;
mod output;

use log::{debug, error, info};
use options::Options;
use output::print::{yes_no, Verbose};
use slcircular::{utility, CircularList, Error, Id, Node};

fn main() {
    let options = Options::parse();
    output::log::start_logging(options.level());
    if let Err(error) = run(&options) {
        error!("{}", error);
        output::exit::failure()
    }
    output::exit::success()
}

fn run(options: &Options) -> Result<(), Error> {
    let mut list = CircularList::new()?;
    info!("empty list created");
    show(&list, options);

    info!("adding {} elements", options.values().len());
    let pushed = options
        .values()
        .iter()
        .map(|value| list.push(*value))
        .collect::<Result<Vec<_>, _>>()?;
    show(&list, options);

    info!("membership");
    let mut outsiders = CircularList::new()?;
    let outsider = outsiders.push(options.outsider)?;
    if let Some(member) = pushed.get(2).or_else(|| pushed.last()) {
        println!(
            "element {} is in the list => {}",
            list.value(*member)?,
            yes_no(utility::is_member(&list, *member))
        );
    }
    println!(
        "element {} is in the list => {}",
        outsiders.value(outsider)?,
        yes_no(utility::is_member(&list, outsider))
    );
    outsiders.destroy();

    info!("previous elements");
    for id in &pushed {
        let previous = utility::previous(&list, *id)?;
        println!(
            "element {} precedes element {}",
            list.value(previous)?,
            list.value(*id)?
        );
    }

    info!("elements by position");
    for position in 0..=utility::size(&list) {
        if let Some(id) = utility::by_position(&list, position) {
            println!("element at position {} is {}", position, list.value(id)?);
        }
    }

    info!("popping the head");
    match list.pop() {
        Ok(head) => debug!("new head: {:?}", head),
        Err(Error::EmptyList) => println!("the list is already empty"),
        Err(error) => return Err(error),
    }
    show(&list, options);

    info!("inserting in the middle of the list");
    let mut inserted = vec![];
    for (count, value) in options.inserts().iter().enumerate() {
        let at = insertion_point(&list, &pushed, 2 * count);
        inserted.push(list.insert(at, *value)?);
        show(&list, options);
    }

    info!("erasing from the middle of the list");
    for id in inserted {
        let next = list.erase(id)?;
        debug!("erased {}, successor {:?}", id, next);
        show(&list, options);
    }

    info!("destroying the list");
    list.destroy();
    Ok(())
}

/// The `index`-th pushed node if it is still in the list.
fn insertion_point(
    list: &CircularList,
    pushed: &[Id<Node>],
    index: usize,
) -> Option<Id<Node>> {
    let id = *pushed.get(index)?;
    if utility::is_member(list, id) {
        Some(id)
    } else {
        list.entry()
    }
}

fn show(list: &CircularList, options: &Options) {
    println!("{}", list);
    debug!("{}", Verbose(list));
    if options.check && !utility::is_well_formed(list) {
        error!("list invariants violated: {}", Verbose(list));
        output::exit::failure()
    }
}
