use crate::error::Error;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use url::Url;

const DRIVE_API_BASE: &str = "https://www.googleapis.com/drive/v3";
const FOLDER_MIME_TYPE: &str = "application/vnd.google-apps.folder";

/// Pulls the contents of a shared Google Drive folder into the submissions
/// root. The drive is an external collaborator: any failure surfaces as
/// `Error::Download`, and nothing is retried.
pub struct DriveDownloader {
    client: reqwest::blocking::Client,
    api_key: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FileList {
    #[serde(default)]
    files: Vec<DriveFile>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DriveFile {
    id: String,
    name: String,
    mime_type: String,
}

impl DriveDownloader {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            api_key: api_key.into(),
        }
    }

    /// Download every regular file in the folder into its own subdirectory
    /// under `dest_root`, creating `dest_root` if needed. Sub-folders are
    /// skipped. Returns the paths of the downloaded files.
    pub fn download_folder(
        &self,
        folder_url: &str,
        dest_root: &Path,
    ) -> Result<Vec<PathBuf>, Error> {
        let folder_id = folder_id_from_url(folder_url)?;
        debug!("Listing drive folder {}", folder_id);

        let files = self.list_folder(&folder_id)?;
        info!("Drive folder contains {} entries", files.len());

        fs::create_dir_all(dest_root)?;

        let mut downloaded = Vec::with_capacity(files.len());
        for file in &files {
            if file.mime_type == FOLDER_MIME_TYPE {
                warn!("Skipping sub-folder '{}' in drive folder", file.name);
                continue;
            }
            let dest = submission_dir(dest_root, &file.name).join(&file.name);
            self.download_file(&file.id, &dest)?;
            info!("Downloaded {} to {}", file.name, dest.display());
            downloaded.push(dest);
        }

        Ok(downloaded)
    }

    fn list_folder(&self, folder_id: &str) -> Result<Vec<DriveFile>, Error> {
        let query = format!("'{}' in parents and trashed = false", folder_id);
        let mut files = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut request = self
                .client
                .get(format!("{}/files", DRIVE_API_BASE))
                .query(&[
                    ("q", query.as_str()),
                    ("fields", "nextPageToken, files(id, name, mimeType)"),
                    ("key", self.api_key.as_str()),
                ]);
            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token.as_str())]);
            }

            let page: FileList = request
                .send()
                .and_then(|response| response.error_for_status())
                .map_err(|err| Error::Download(err.to_string()))?
                .json()
                .map_err(|err| Error::Download(err.to_string()))?;

            files.extend(page.files);
            match page.next_page_token {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        Ok(files)
    }

    fn download_file(&self, file_id: &str, dest: &Path) -> Result<(), Error> {
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        let bytes = self
            .client
            .get(format!("{}/files/{}", DRIVE_API_BASE, file_id))
            .query(&[("alt", "media"), ("key", self.api_key.as_str())])
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(|err| Error::Download(err.to_string()))?
            .bytes()
            .map_err(|err| Error::Download(err.to_string()))?;

        fs::write(dest, &bytes)?;
        Ok(())
    }
}

// Each downloaded file gets its own directory named after the file stem,
// matching the one-directory-per-submission layout.
fn submission_dir(dest_root: &Path, file_name: &str) -> PathBuf {
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name);
    dest_root.join(stem)
}

/// Extract the folder id from a Drive folder link, either a
/// `…/drive/folders/<id>` path or an `?id=<id>` query parameter.
pub fn folder_id_from_url(folder_url: &str) -> Result<String, Error> {
    let url = Url::parse(folder_url)
        .map_err(|err| Error::Download(format!("invalid folder link: {}", err)))?;

    let segments: Vec<&str> = url
        .path_segments()
        .map(|segments| segments.collect())
        .unwrap_or_default();
    if let Some(pos) = segments.iter().position(|s| *s == "folders") {
        if let Some(id) = segments.get(pos + 1) {
            if !id.is_empty() {
                return Ok((*id).to_string());
            }
        }
    }

    if let Some((_, id)) = url.query_pairs().find(|(key, _)| key == "id") {
        return Ok(id.into_owned());
    }

    Err(Error::Download(format!(
        "no folder id in link: {}",
        folder_url
    )))
}
