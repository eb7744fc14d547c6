use crate::api::{ApiClient, GenerationForm, GenerationResult};
use crate::error::ClientError;
use std::sync::mpsc::{channel, Receiver, TryRecvError};

/// Owns the document-parameter form and the generate request lifecycle.
/// Independent of the upload side; the two may be in flight at the same time.
#[derive(Default)]
pub struct GenerationController {
    form: GenerationForm,
    result: Option<GenerationResult>,
    error: Option<String>,
    receiver: Option<Receiver<Result<GenerationResult, ClientError>>>,
}

impl GenerationController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &GenerationForm {
        &self.form
    }

    /// The form widgets edit fields through here; there is no cross-field
    /// validation on edit.
    pub fn form_mut(&mut self) -> &mut GenerationForm {
        &mut self.form
    }

    /// Dispatch one generate request. Fails synchronously, without touching
    /// the network, when a request is outstanding or the owner name is blank.
    pub fn generate(&mut self, client: &ApiClient) -> Result<(), ClientError> {
        let outcome = self.dispatch(client);
        if let Err(err) = &outcome {
            self.error = Some(err.to_string());
        }
        outcome
    }

    fn dispatch(&mut self, client: &ApiClient) -> Result<(), ClientError> {
        if self.in_flight() {
            return Err(ClientError::Busy);
        }
        if self.form.owner_name.trim().is_empty() {
            return Err(ClientError::validation("owner/testator name required"));
        }

        self.error = None;
        let client = client.clone();
        let form = self.form.clone();
        let (sender, receiver) = channel();
        self.receiver = Some(receiver);

        std::thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().unwrap();
            let outcome = rt.block_on(client.generate(&form));
            sender.send(outcome).unwrap_or_default();
        });

        Ok(())
    }

    /// Single commit point for the completion event, mirroring the upload side.
    pub fn poll(&mut self) -> bool {
        let Some(receiver) = &self.receiver else {
            return false;
        };
        match receiver.try_recv() {
            Ok(outcome) => {
                self.receiver = None;
                match outcome {
                    Ok(result) => {
                        self.result = Some(result);
                        self.error = None;
                    }
                    Err(err) => self.error = Some(err.to_string()),
                }
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => {
                self.receiver = None;
                self.error = Some("generate worker disappeared".to_string());
                true
            }
        }
    }

    pub fn in_flight(&self) -> bool {
        self.receiver.is_some()
    }

    pub fn result(&self) -> Option<&GenerationResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
