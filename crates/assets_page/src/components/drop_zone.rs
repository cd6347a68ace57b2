use assets_host::UploadFile;
use leptos::*;

use super::use_assets_page;
use crate::reducer::AssetsPageAction;

fn upload_files_from_list(files: &web_sys::FileList) -> Vec<UploadFile> {
    (0..files.length())
        .filter_map(|index| files.item(index))
        .map(|file| UploadFile {
            name: file.name(),
            content_type: file.type_(),
            size_bytes: file.size().max(0.0) as u64,
        })
        .collect()
}

fn max_size_hint(max_file_size_mb: u64) -> String {
    format!("Maximum file size: {max_file_size_mb} MB")
}

#[component]
pub(super) fn AssetsDropZone() -> impl IntoView {
    let page = use_assets_page();
    let dragging = create_rw_signal(false);
    let max_file_size_mb = create_memo(move |_| {
        page.state
            .with(|state| state.snapshot.upload_settings.max_file_size_in_mbs)
    });

    let upload = move |files: Vec<UploadFile>| {
        if files.is_empty() {
            return;
        }
        page.dispatch_action(AssetsPageAction::UploadFiles { files });
    };

    let on_drop = move |ev: ev::DragEvent| {
        ev.prevent_default();
        dragging.set(false);
        let Some(files) = ev.data_transfer().and_then(|transfer| transfer.files()) else {
            return;
        };
        upload(upload_files_from_list(&files));
    };

    let on_change = move |ev: ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let Some(files) = input.files() else {
            return;
        };
        upload(upload_files_from_list(&files));
        input.set_value("");
    };

    view! {
        <div
            class="drop-zone"
            class=("drop-zone-active", move || dragging.get())
            on:dragover=move |ev: ev::DragEvent| {
                ev.prevent_default();
                dragging.set(true);
            }
            on:dragleave=move |_| dragging.set(false)
            on:drop=on_drop
        >
            <label class="drop-zone-label" for="assets-upload-input">
                "Drag and drop your file here, or click to browse"
            </label>
            <input
                id="assets-upload-input"
                class="drop-zone-input"
                type="file"
                multiple=true
                on:change=on_change
            />
            <p class="drop-zone-hint">{move || max_size_hint(max_file_size_mb.get())}</p>
        </div>
    }
}
