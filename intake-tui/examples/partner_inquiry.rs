//! Run the partner inquiry questionnaire in the terminal.
//!
//! Same delivery setup as the startup application example: a Web3Forms
//! access key as the first argument sends for real, otherwise a stub.

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

    let mut wizard = WizardState::new(example_intakes::partner_inquiry());
    let mut submit =
        |wizard: &mut WizardState| runtime.block_on(wizard.submit(sink.as_ref()));

    match IntakeTui::new().run(&mut wizard, &mut submit) {
        Ok(()) => Ok(()),
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
