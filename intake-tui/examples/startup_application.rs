//! Run the startup application questionnaire in the terminal.
//!
//! Pass a Web3Forms access key as the first argument to deliver the record
//! for real; without one a stub accepts it and the flattened payload is
//! printed on exit.

use anyhow::Result;
use intake_tui::IntakeTui;
use intake_types::IntakeError;
use intake_web3forms::Web3FormsSink;
use intake_wizard::{StubSink, SubmitSink, WizardState};

fn main() -> Result<()> {
    let access_key = std::env::args().nth(1);
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let sink: Box<dyn SubmitSink> = match &access_key {
        Some(key) => Box::new(Web3FormsSink::new(key.clone())),
        None => Box::new(StubSink::ok()),
    };

    let mut wizard = WizardState::new(example_intakes::startup_application());
    let mut submit =
        |wizard: &mut WizardState| runtime.block_on(wizard.submit(sink.as_ref()));

    match IntakeTui::new().run(&mut wizard, &mut submit) {
        Ok(()) => {
            if access_key.is_none() {
                println!("No access key given; the record was accepted by a stub:");
                for (key, value) in &wizard.payload().fields {
                    println!("  {key}: {value}");
                }
            }
            Ok(())
        }
        Err(err) => {
            let err = IntakeError::from(err);
            if err.is_cancelled() {
                println!("Cancelled.");
                return Ok(());
            }
            Err(err.into())
        }
    }
}
