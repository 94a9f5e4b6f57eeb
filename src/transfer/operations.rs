//! Transfer operations
//!
//! Data-connection commands built on `ControlSession::execute_with_data_connection`:
//! directory listings, downloads and uploads.

use log::info;
use tokio::io::AsyncRead;

use crate::client::ControlSession;
use crate::error::FtpResult;
use crate::listing::{Clock, DirectoryEntry, ListingParser, ListingReport};
use crate::protocol::Command;
use crate::transfer::data_channel::DataTransferChannel;

impl ControlSession {
    /// LIST `path` and parse every line, dropping the ones no dialect accepts.
    pub async fn list(&mut self, path: &str) -> FtpResult<Vec<DirectoryEntry>> {
        Ok(self.list_report(path).await?.entries)
    }

    /// LIST `path`, keeping the lines that could not be parsed.
    pub async fn list_report(&mut self, path: &str) -> FtpResult<ListingReport> {
        let parser = ListingParser::new();
        self.list_with_parser(path, &parser).await
    }

    pub async fn list_with_parser<C: Clock>(
        &mut self,
        path: &str,
        parser: &ListingParser<C>,
    ) -> FtpResult<ListingReport> {
        let mut channel = self
            .execute_with_data_connection(Command::List(path.to_string()))
            .await?;

        let mut report = ListingReport::default();
        let mut line = String::new();
        loop {
            line.clear();
            if channel.read_line(&mut line).await? == 0 {
                break;
            }
            report.record(parser, &line);
        }

        info!(
            "Listed {}: {} entries, {} skipped",
            if path.is_empty() { "." } else { path },
            report.entries.len(),
            report.skipped.len()
        );
        Ok(report)
    }

    /// RETR `path`, handing back the open data channel for streaming reads.
    pub async fn retr(&mut self, path: &str) -> FtpResult<DataTransferChannel<'_>> {
        self.execute_with_data_connection(Command::Retr(path.to_string()))
            .await
    }

    /// RETR `path` into memory.
    pub async fn retrieve(&mut self, path: &str) -> FtpResult<Vec<u8>> {
        let mut channel = self.retr(path).await?;
        let mut data = Vec::new();
        channel.read_to_end(&mut data).await?;
        info!("Retrieved {} ({} bytes)", path, data.len());
        Ok(data)
    }

    /// STOR `source` as `path`. Returns the number of bytes sent.
    pub async fn store<R>(&mut self, path: &str, source: &mut R) -> FtpResult<u64>
    where
        R: AsyncRead + Unpin + ?Sized,
    {
        let mut channel = self
            .execute_with_data_connection(Command::Stor(path.to_string()))
            .await?;
        let written = channel.write_from(source).await?;
        channel.finish_upload().await?;
        info!("Stored {} ({} bytes)", path, written);
        Ok(written)
    }
}
