use crate::api::{ApiClient, SelectedFile, UploadResult};
use crate::error::ClientError;
use std::sync::mpsc::{channel, Receiver, TryRecvError};

/// Owns the file selection and the upload request lifecycle. The completion
/// receiver doubles as the in-flight flag: while it is live, one request is
/// outstanding and further triggers are rejected.
#[derive(Default)]
pub struct UploadController {
    selected_file: Option<SelectedFile>,
    result: Option<UploadResult>,
    error: Option<String>,
    receiver: Option<Receiver<Result<UploadResult, ClientError>>>,
}

impl UploadController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection. A new selection invalidates any prior
    /// verification output, so the stored result (and error) are cleared.
    pub fn select_file(&mut self, file: SelectedFile) {
        self.selected_file = Some(file);
        self.result = None;
        self.error = None;
    }

    /// Dispatch one upload request. Fails synchronously, without touching the
    /// network, when a request is already outstanding or no file is selected.
    pub fn upload(&mut self, client: &ApiClient) -> Result<(), ClientError> {
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
        let file = self
            .selected_file
            .clone()
            .ok_or_else(|| ClientError::validation("no file selected"))?;

        self.error = None;
        let client = client.clone();
        let (sender, receiver) = channel();
        self.receiver = Some(receiver);

        std::thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().unwrap();
            let outcome = rt.block_on(client.upload(&file));
            sender.send(outcome).unwrap_or_default();
        });

        Ok(())
    }

    /// Drain the completion channel. This is the single commit point: a success
    /// stores the new result, a failure surfaces the message and leaves the
    /// prior result untouched. Returns true when state changed.
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
                self.error = Some("upload worker disappeared".to_string());
                true
            }
        }
    }

    pub fn in_flight(&self) -> bool {
        self.receiver.is_some()
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selected_file.as_ref()
    }

    pub fn result(&self) -> Option<&UploadResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use std::{env, fs};

    fn temp_image(name: &str) -> SelectedFile {
        let path = env::temp_dir().join(name);
        fs::write(&path, b"\x89PNG\r\n\x1a\nfakeimage").unwrap();
        SelectedFile::from_path(path)
    }

    fn wait_for_completion(controller: &mut UploadController) {
        for _ in 0..250 {
            if controller.poll() {
                return;
            }
            std::thread::sleep(Duration::from_millis(20));
        }
        panic!("upload did not complete in time");
    }

    #[test]
    fn upload_without_selection_is_a_validation_error_and_no_request() {
        let mut server = mockito::Server::new();
        let mock = server.mock("POST", "/upload/").expect(0).create();
        let client = ApiClient::new(server.url());

        let mut controller = UploadController::new();
        let err = controller.upload(&client).unwrap_err();

        assert_eq!(err, ClientError::Validation("no file selected".to_string()));
        assert_eq!(controller.error(), Some("no file selected"));
        assert!(!controller.in_flight());
        mock.assert();
    }

    #[test]
    fn successful_upload_commits_the_result() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/upload/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"file_id":"f1","filename":"a.png","faces_found":1,
                   "ocr_text":"Hello","qr_url":"http://x/qr1.png"}"#,
            )
            .create();
        let client = ApiClient::new(server.url());

        let mut controller = UploadController::new();
        controller.select_file(temp_image("notary_ctrl_ok.png"));
        controller.upload(&client).unwrap();
        assert!(controller.in_flight());

        wait_for_completion(&mut controller);

        assert!(!controller.in_flight());
        assert!(controller.error().is_none());
        let result = controller.result().unwrap();
        assert_eq!(result.file_id, "f1");
        assert_eq!(result.filename, "a.png");
        assert_eq!(result.faces_found, 1);
        assert_eq!(result.ocr_text, "Hello");
        assert_eq!(result.qr_url, "http://x/qr1.png");
    }

    #[test]
    fn failed_upload_surfaces_detail_and_keeps_prior_result() {
        let mut server = mockito::Server::new();
        let ok = server
            .mock("POST", "/upload/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"file_id":"f1","filename":"a.png","faces_found":0,
                   "ocr_text":"","qr_url":"http://x/qr1.png"}"#,
            )
            .expect(1)
            .create();
        let client = ApiClient::new(server.url());

        let mut controller = UploadController::new();
        controller.select_file(temp_image("notary_ctrl_fail.png"));
        controller.upload(&client).unwrap();
        wait_for_completion(&mut controller);
        assert!(controller.result().is_some());
        ok.assert();

        server
            .mock("POST", "/upload/")
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#"{"detail":"image too small"}"#)
            .create();

        controller.upload(&client).unwrap();
        wait_for_completion(&mut controller);

        assert_eq!(controller.error(), Some("image too small"));
        // The failed attempt must not clobber the stored result.
        assert_eq!(controller.result().unwrap().file_id, "f1");
    }

    #[test]
    fn selecting_a_new_file_clears_the_stored_result() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/upload/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"file_id":"f1","filename":"a.png","faces_found":0,
                   "ocr_text":"","qr_url":"http://x/qr1.png"}"#,
            )
            .create();
        let client = ApiClient::new(server.url());

        let mut controller = UploadController::new();
        controller.select_file(temp_image("notary_ctrl_reselect.png"));
        controller.upload(&client).unwrap();
        wait_for_completion(&mut controller);
        assert!(controller.result().is_some());

        controller.select_file(temp_image("notary_ctrl_reselect2.png"));
        assert!(controller.result().is_none());
        assert_eq!(
            controller.selected_file().unwrap().name,
            "notary_ctrl_reselect2.png"
        );
    }

    #[test]
    fn second_trigger_while_in_flight_is_rejected_as_busy() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/upload/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"file_id":"f1","filename":"a.png","faces_found":0,
                   "ocr_text":"","qr_url":"http://x/qr1.png"}"#,
            )
            .expect_at_most(1)
            .create();
        let client = ApiClient::new(server.url());

        let mut controller = UploadController::new();
        controller.select_file(temp_image("notary_ctrl_busy.png"));
        controller.upload(&client).unwrap();

        let err = controller.upload(&client).unwrap_err();
        assert_eq!(err, ClientError::Busy);

        wait_for_completion(&mut controller);
        assert!(controller.result().is_some());
    }
}
