use crate::controller::ConfirmDialog;

#[derive(Debug, Clone, Copy, Default)]
pub struct NativeConfirm;

impl ConfirmDialog for NativeConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        let answer = rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Warning)
            .set_title("Confirm")
            .set_description(prompt)
            .set_buttons(rfd::MessageButtons::YesNo)
            .show();
        matches!(answer, rfd::MessageDialogResult::Yes)
    }
}
