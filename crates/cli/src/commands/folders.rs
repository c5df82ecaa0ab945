//! Folders command implementation.

use anyhow::Result;
use clap::Subcommand;
use grafana_client::{CreateFolderParams, GrafanaClient, NormalizedResult};

#[derive(Subcommand)]
pub enum FoldersCommand {
    /// List folders
    List {
        /// Maximum number of folders to return (server default page: 1000)
        #[arg(short, long)]
        limit: Option<u32>,
    },
    /// Get a folder by UID
    Get {
        /// Folder UID
        uid: String,
    },
    /// Create a folder
    Create {
        /// Folder title
        #[arg(long)]
        title: String,
        /// Explicit folder UID (generated by the server when omitted)
        #[arg(long)]
        uid: Option<String>,
    },
    /// Delete a folder by UID
    Delete {
        /// Folder UID
        uid: String,
    },
}

pub fn run(client: &GrafanaClient, command: FoldersCommand) -> Result<NormalizedResult> {
    let result = match command {
        FoldersCommand::List { limit } => client.get_all_folders(limit)?,
        FoldersCommand::Get { uid } => client.get_folder_by_uid(&uid)?,
        FoldersCommand::Create { title, uid } => {
            let mut params = CreateFolderParams::new(title);
            if let Some(uid) = uid {
                params = params.with_uid(uid);
            }
            client.create_folder(&params)?
        }
        FoldersCommand::Delete { uid } => client.delete_folder_by_uid(&uid)?,
    };
    Ok(result)
}
