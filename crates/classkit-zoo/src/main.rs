//! # Zoo
//!
//! Builds the bestiary, constructs one of each and prints what each instance
//! is. Run with `RUST_LOG=debug` to watch the hierarchy being assembled.

use classkit::lifecycle::setup_tracing;
use classkit::{ClassError, Value};
use classkit_zoo::Bestiary;
use tracing::{info, info_span, warn};

fn main() -> Result<(), ClassError> {
    setup_tracing();

    info!("Building bestiary");
    let zoo = Bestiary::build()?;

    for (name, class) in zoo.roster() {
        let _span = info_span!("specimen", class = name).entered();
        let specimen = class.construct(&[Value::from(format!("a {name}"))])?;

        let kinds: Vec<&str> = zoo
            .roster()
            .into_iter()
            .filter(|(_, other)| specimen.instance_of(other))
            .map(|(kind, _)| kind)
            .collect();
        info!(?kinds, "Constructed");

        let speak = specimen.get("speak")?;
        if speak.is_callable() {
            let line = speak.call(&Value::Object(specimen.clone()), &[])?;
            info!(line = ?line, "Speaks");
        }
    }

    match classkit::root().mixin(&zoo.human) {
        Ok(_) => info!("Root accepted a mixin"),
        Err(e) => warn!(error = %e, "Mixin into root refused"),
    }

    info!(
        werewolf_is_wolf = zoo.werewolf.is_inheritor_of(&zoo.wolf),
        werewolf_is_human = zoo.werewolf.is_inheritor_of(&zoo.human),
        "Ancestry"
    );
    Ok(())
}
