//! 画像プレビュー用のData URL読み込み

use std::cell::RefCell;
use std::rc::Rc;
use futures::channel::oneshot;
use wasm_bindgen::prelude::*;
use web_sys::{Blob, FileReader, ProgressEvent};
use leaf_nutrition_common::{Error, Result};
use crate::api::js_error;

type Reply = Rc<RefCell<Option<oneshot::Sender<Result<String>>>>>;

fn reply(tx: &Reply, result: Result<String>) {
    if let Some(tx) = tx.borrow_mut().take() {
        let _ = tx.send(result);
    }
}

/// BlobをData URL（"data:image/png;base64,..."）として読み込む
pub async fn read_data_url(blob: &Blob) -> Result<String> {
    let reader = FileReader::new().map_err(js_error)?;
    let (tx, rx) = oneshot::channel();
    let tx: Reply = Rc::new(RefCell::new(Some(tx)));

    let onload = {
        let tx = tx.clone();
        let reader = reader.clone();
        Closure::<dyn FnMut(ProgressEvent)>::new(move |_| {
            let result = reader
                .result()
                .ok()
                .and_then(|value| value.as_string())
                .ok_or_else(|| Error::Transport("FileReader returned no data URL".into()));
            reply(&tx, result);
        })
    };
    let onerror = {
        let tx = tx.clone();
        Closure::<dyn FnMut(ProgressEvent)>::new(move |_| {
            reply(&tx, Err(Error::Transport("failed to read file".into())));
        })
    };

    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    reader.read_as_data_url(blob).map_err(js_error)?;

    let result = rx
        .await
        .map_err(|_| Error::Transport("file read was cancelled".into()))?;

    reader.set_onload(None);
    reader.set_onerror(None);
    result
}
