//! # Zoo
//!
//! A small bestiary built with `classkit`, used by the `classkit-zoo` binary
//! and its integration tests.
//!
//! - `Animal -> Wolf -> Dog` and `Animal -> Bird -> Eagle` through `create`;
//! - `Werewolf`, a wolf with the `Human` mixin;
//! - `ZooError`, a foreign error class adopted with `wrap`.

use classkit::{inherits, root, wrap, Class, ClassError, ExtensionDescriptor, Function, Invocation, Value};
use tracing::info;

/// Composition rules for the human mixin, as they would come from a config file.
pub const HUMAN_TRAITS: &str = r#"{ "exclude": ["habitat"] }"#;

pub struct Bestiary {
    pub animal: Class,
    pub wolf: Class,
    pub dog: Class,
    pub bird: Class,
    pub eagle: Class,
    pub human: Class,
    pub werewolf: Class,
    pub zoo_error: Class,
}

/// Body that delegates to the ancestor, then raises `flag` on the receiver.
fn flagging(name: &str, flag: &'static str) -> Class {
    Class::new(name, move |inv: &Invocation<'_>| {
        inv.call_super()?;
        inv.receiver_object()?.set(flag, true)?;
        Ok(Value::Undefined)
    })
}

fn speaker(name: &str, line: &'static str) -> Function {
    Function::new(name, move |_, _| Ok(Value::from(line)))
}

impl Bestiary {
    pub fn build() -> Result<Self, ClassError> {
        let animal = root().inherit(flagging("Animal", "animal"))?;
        animal.set("kingdom", "animalia")?;
        animal.set("habitat", vec!["forest", "plains"])?;

        let wolf = animal.inherit(flagging("Wolf", "wolf"))?;
        wolf.prototype()
            .ok_or_else(|| ClassError::MissingPrototype(wolf.name().to_string()))?
            .set("speak", speaker("speak", "awoo"))?;
        let dog = wolf.inherit(flagging("Dog", "dog"))?;

        let bird = animal.inherit(flagging("Bird", "bird"))?;
        let eagle = bird.create()?;

        let human = root().inherit(flagging("Human", "human"))?;
        human.set("habitat", vec!["cities"])?;
        human.set("languages", vec!["common"])?;
        let template = human
            .prototype()
            .ok_or_else(|| ClassError::MissingPrototype(human.name().to_string()))?;
        template.set("speak", speaker("speak", "hello"))?;
        template.set("read", speaker("read", "once upon a time"))?;

        let werewolf = wolf.inherit(flagging("Werewolf", "werewolf"))?;
        werewolf.mixin_with(ExtensionDescriptor::from_json(HUMAN_TRAITS)?, &human, &[])?;
        werewolf.mixin(Value::from(serde_json::json!({ "nocturnal": true, "moons": ["full"] })))?;

        let zoo_error = Self::zoo_error()?;

        info!(classes = 8, "Bestiary ready");
        Ok(Self {
            animal,
            wolf,
            dog,
            bird,
            eagle,
            human,
            werewolf,
            zoo_error,
        })
    }

    /// An error class from outside the toolkit, linked and adopted.
    fn zoo_error() -> Result<Class, ClassError> {
        let error = Class::new("Error", |inv| {
            inv.receiver_object()?.set("message", inv.arg(0))?;
            Ok(Value::Undefined)
        });
        let zoo_error = Class::new("ZooError", |inv| {
            inv.receiver_object()?.set("message", inv.arg(0))?;
            inv.receiver_object()?.set("zoo", true)?;
            Ok(Value::Undefined)
        });
        inherits(&zoo_error, &error)?;
        Ok(wrap(&zoo_error, Some(&error)))
    }

    /// Every class with its name, in build order.
    pub fn roster(&self) -> Vec<(&'static str, &Class)> {
        vec![
            ("Animal", &self.animal),
            ("Wolf", &self.wolf),
            ("Dog", &self.dog),
            ("Bird", &self.bird),
            ("Eagle", &self.eagle),
            ("Human", &self.human),
            ("Werewolf", &self.werewolf),
            ("ZooError", &self.zoo_error),
        ]
    }
}
