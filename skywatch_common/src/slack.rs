/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

//! slack web api abstraction

use std::{error::Error, fs, io::{Error as IOError, ErrorKind}, path::PathBuf, result::Result};
use reqwest::Client;
use serde::{Deserialize,Serialize};
use serde_json;

type SlackError = Box<dyn Error + Send + Sync>;
type SlackResult<T> = Result<T,SlackError>;

/// a file to be uploaded together with a message
pub struct FileAttachment {
    pub path: PathBuf,
    pub caption: String
}

/// send chat text message
/// note - icon replaces avatar, but only in the first of a sequence of messages from the same sender
pub async fn send_msg (client: &Client, token: &str, channel_id: &str, msg: &str, icon: Option<&str>) -> SlackResult<()> {
    let mut params: Vec<(&str,&str)> = Vec::new();
    params.push( ("channel", channel_id) );
    params.push( ("text", msg) );
    if let Some(icon_name) = icon { params.push( ("icon_emoji", icon_name) ); }

    let resp = client.post("https://slack.com/api/chat.postMessage")
        .bearer_auth( token)
        .query( &params)
        .send()
        .await?
        .error_for_status()?;

    Ok(())
}

#[derive(Deserialize,Debug)]
struct FilesGetUploadUrlExternalResponse {
    ok: bool,
    upload_url: String,
    file_id: String
}

#[derive(Serialize)]
struct UploadFile {
    id: String, // slack id (not pathname)
    title: String
}

/// send a message with attached files to a Slack channel
/// note that channel_id is not a channel name!
pub async fn send_msg_with_files (client: &Client, token: &str, channel_id: &str, msg: &str, files: &[FileAttachment]) -> SlackResult<()> {
    let uploads = upload_files( client, token, files).await?;

    let resp = client.get("https://slack.com/api/files.completeUploadExternal")
        .bearer_auth( token)
        .query( &[
            ("files", serde_json::to_string( &uploads)?.as_str()),
            ("channel_id", channel_id),
            ("initial_comment", msg)
        ])
        .send()
        .await?
        .error_for_status()?;

    Ok(())
}

/// upload a list of files to Slack
async fn upload_files (client: &Client, token: &str, files: &[FileAttachment])->SlackResult<Vec<UploadFile>> {
    let mut uploads: Vec<UploadFile> = Vec::with_capacity(files.len());

    for f in files {
        let path = &f.path;
        if !path.is_file() { return Err( Box::new(IOError::new(ErrorKind::NotFound, path.display().to_string()))) }

        let filename = match path.file_name().and_then(|s| s.to_str()) {
            Some(name) => name,
            None => return Err( Box::new(IOError::new(ErrorKind::InvalidInput, path.display().to_string())))
        };
        let contents = fs::read(path)?;
        let length = contents.len();

        let resp = client.get( "https://slack.com/api/files.getUploadURLExternal")
            .bearer_auth( token)
            .query( &[
                ("filename", filename),
                ("length", length.to_string().as_str())
            ])
            .send()
            .await?;

        let url_resp: FilesGetUploadUrlExternalResponse = serde_json::from_str( resp.text().await?.as_str())?;
        if !url_resp.ok { return Err( Box::new(IOError::new(ErrorKind::InvalidData, "files.getUploadURLExternal rejected"))) }

        client.post( url_resp.upload_url.as_str())
            .body( contents)
            .send()
            .await?;

        uploads.push( UploadFile { id: url_resp.file_id, title: f.caption.clone() });
    }

    Ok(uploads)
}
