//! アップロードエリアコンポーネント

use leptos::html;
use leptos::prelude::*;
use web_sys::{DragEvent, Event, File, MouseEvent};
use leaf_nutrition_common::{Error, Pipeline};

#[component]
pub fn UploadArea<F, R>(
    pipeline: RwSignal<Pipeline<File>, LocalStorage>,
    file_input: NodeRef<html::Input>,
    on_file: F,
    on_remove: R,
) -> impl IntoView
where
    F: Fn(File) + 'static + Clone + Send + Sync,
    R: Fn() + 'static + Clone + Send + Sync,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let max_mb = pipeline.with_untracked(|p| p.config().max_file_size / (1024 * 1024));
    let preview = move || pipeline.with(|p| p.preview().map(str::to_string));

    let on_drop = {
        let on_file = on_file.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            // 複数ドロップされても先頭の1枚だけ
            if let Some(file) = ev
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|files| files.get(0))
            {
                on_file(file);
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(false);
    };

    // ファイル選択ダイアログを開く
    let on_click = move |_: MouseEvent| match file_input.get_untracked() {
        Some(input) => input.click(),
        None => log::error!("{}", Error::MissingElement("fileInput")),
    };

    let on_change = move |_: Event| {
        let file = file_input
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            on_file(file);
        }
    };

    let on_remove_click = move |ev: MouseEvent| {
        ev.stop_propagation();
        on_remove();
    };

    view! {
        <div
            class=move || if is_dragover.get() { "upload-area drag-over" } else { "upload-area" }
            id="uploadArea"
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <input
                type="file"
                id="fileInput"
                accept="image/png, image/jpeg, image/jpg"
                hidden=true
                node_ref=file_input
                on:change=on_change
                on:click=|ev: MouseEvent| ev.stop_propagation()
            />
            <div
                class="upload-placeholder"
                id="uploadPlaceholder"
                style:display=move || if pipeline.with(|p| p.placeholder_visible()) { "flex" } else { "none" }
            >
                <svg class="upload-icon" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
                    <path d="M21 15V19C21 19.5304 20.7893 20.0391 20.4142 20.4142C20.0391 20.7893 19.5304 21 19 21H5C4.46957 21 3.96086 20.7893 3.58579 20.4142C3.21071 20.0391 3 19.5304 3 19V15" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" />
                    <path d="M17 8L12 3L7 8" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" />
                    <path d="M12 3V15" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" />
                </svg>
                <h4>"Click to upload or drag and drop"</h4>
                <p>{format!("Maximum file size: {}MB", max_mb)}</p>
            </div>
            <div
                class="image-preview"
                id="imagePreview"
                style:display=move || if preview().is_some() { "block" } else { "none" }
            >
                <img id="previewImage" src=move || preview().unwrap_or_default() alt="Preview" />
                <button class="remove-btn" id="removeBtn" type="button" on:click=on_remove_click>
                    <svg viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
                        <path d="M18 6L6 18M6 6L18 18" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" />
                    </svg>
                </button>
            </div>
        </div>
    }
}
