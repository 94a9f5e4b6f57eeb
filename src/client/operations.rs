//! Client operations
//!
//! Single-reply commands: navigation, file management and keep-alive.

use log::info;

use crate::client::ControlSession;
use crate::error::FtpResult;
use crate::protocol::responses::{
    COMMAND_OK, PATH_CREATED, REQUESTED_FILE_ACTION_OK, REQUEST_FILE_PENDING,
};
use crate::protocol::{parse_pwd_reply, Command, ExpectedReply};

impl ControlSession {
    /// CWD `path`
    pub async fn change_dir(&mut self, path: &str) -> FtpResult<()> {
        self.execute(
            Command::Cwd(path.to_string()),
            ExpectedReply::Exact(REQUESTED_FILE_ACTION_OK),
        )
        .await?;
        info!("Changed directory to {}", path);
        Ok(())
    }

    /// CDUP
    pub async fn change_dir_to_parent(&mut self) -> FtpResult<()> {
        self.execute(Command::Cdup, ExpectedReply::Exact(REQUESTED_FILE_ACTION_OK))
            .await?;
        Ok(())
    }

    /// PWD, returning the quoted path from the reply.
    pub async fn current_dir(&mut self) -> FtpResult<String> {
        let reply = self
            .execute(Command::Pwd, ExpectedReply::Exact(PATH_CREATED))
            .await?;
        Ok(parse_pwd_reply(&reply.message)?)
    }

    /// RNFR `from` followed by RNTO `to`.
    pub async fn rename(&mut self, from: &str, to: &str) -> FtpResult<()> {
        self.execute(
            Command::Rnfr(from.to_string()),
            ExpectedReply::Exact(REQUEST_FILE_PENDING),
        )
        .await?;
        self.execute(
            Command::Rnto(to.to_string()),
            ExpectedReply::Exact(REQUESTED_FILE_ACTION_OK),
        )
        .await?;
        info!("Renamed {} to {}", from, to);
        Ok(())
    }

    /// DELE `path`
    pub async fn delete(&mut self, path: &str) -> FtpResult<()> {
        self.execute(
            Command::Dele(path.to_string()),
            ExpectedReply::Exact(REQUESTED_FILE_ACTION_OK),
        )
        .await?;
        info!("Deleted {}", path);
        Ok(())
    }

    /// MKD `path`
    pub async fn make_dir(&mut self, path: &str) -> FtpResult<()> {
        self.execute(
            Command::Mkd(path.to_string()),
            ExpectedReply::Exact(PATH_CREATED),
        )
        .await?;
        info!("Created directory {}", path);
        Ok(())
    }

    /// RMD `path`
    pub async fn remove_dir(&mut self, path: &str) -> FtpResult<()> {
        self.execute(
            Command::Rmd(path.to_string()),
            ExpectedReply::Exact(REQUESTED_FILE_ACTION_OK),
        )
        .await?;
        info!("Removed directory {}", path);
        Ok(())
    }

    /// NOOP
    pub async fn no_op(&mut self) -> FtpResult<()> {
        self.execute(Command::Noop, ExpectedReply::Exact(COMMAND_OK))
            .await?;
        Ok(())
    }
}
