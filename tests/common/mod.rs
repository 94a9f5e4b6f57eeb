//! Scripted FTP server for integration tests
//!
//! The server accepts one control connection and plays its script step by
//! step. Every command line it reads is recorded. Once the script is done it
//! keeps recording lines until the client closes the connection.

#![allow(dead_code)]

use std::net::SocketAddr;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::tcp::OwnedReadHalf;
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

pub enum Step {
    /// Write raw text without reading anything (greetings, late replies).
    Send(&'static str),
    /// Read one command, then write the raw reply text.
    Reply(&'static str),
    /// Read one command, open a data listener and answer 227.
    Pasv,
    /// Read one command, open a data listener and answer 229.
    Epsv,
    /// Accept the data connection, write the payload and close it.
    SendData(&'static str),
    /// Accept the data connection and read it to the end.
    ReceiveData,
    /// Drop the control connection.
    Hangup,
}

#[derive(Debug, Default)]
pub struct Transcript {
    pub commands: Vec<String>,
    pub uploads: Vec<Vec<u8>>,
}

pub struct MockServer {
    addr: SocketAddr,
    handle: JoinHandle<Transcript>,
}

impl MockServer {
    pub async fn start(script: Vec<Step>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (stream, _) = listener.accept().await.unwrap();
            run_script(stream, script).await
        });
        Self { addr, handle }
    }

    pub fn address(&self) -> String {
        self.addr.to_string()
    }

    /// Wait for the client to hang up and return what the server saw.
    pub async fn finish(self) -> Transcript {
        self.handle.await.unwrap()
    }
}

/// Greeting plus a USER/PASS exchange.
pub fn logged_in(mut rest: Vec<Step>) -> Vec<Step> {
    let mut script = vec![
        Step::Send("220 Mock FTP ready\r\n"),
        Step::Reply("331 Password required\r\n"),
        Step::Reply("230 User logged in\r\n"),
    ];
    script.append(&mut rest);
    script
}

async fn read_command(reader: &mut BufReader<OwnedReadHalf>) -> String {
    let mut line = String::new();
    reader.read_line(&mut line).await.unwrap();
    line.trim_end_matches(['\r', '\n']).to_string()
}

async fn open_data_listener() -> (TcpListener, u16) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    (listener, port)
}

async fn run_script(stream: TcpStream, script: Vec<Step>) -> Transcript {
    let (read_half, mut writer) = stream.into_split();
    let mut reader = BufReader::new(read_half);
    let mut transcript = Transcript::default();
    let mut data_listener = None;

    for step in script {
        match step {
            Step::Send(text) => writer.write_all(text.as_bytes()).await.unwrap(),
            Step::Reply(text) => {
                transcript.commands.push(read_command(&mut reader).await);
                writer.write_all(text.as_bytes()).await.unwrap();
            }
            Step::Pasv => {
                transcript.commands.push(read_command(&mut reader).await);
                let (listener, port) = open_data_listener().await;
                let reply = format!(
                    "227 Entering Passive Mode (127,0,0,1,{},{})\r\n",
                    port / 256,
                    port % 256
                );
                writer.write_all(reply.as_bytes()).await.unwrap();
                data_listener = Some(listener);
            }
            Step::Epsv => {
                transcript.commands.push(read_command(&mut reader).await);
                let (listener, port) = open_data_listener().await;
                let reply = format!("229 Entering Extended Passive Mode (|||{}|)\r\n", port);
                writer.write_all(reply.as_bytes()).await.unwrap();
                data_listener = Some(listener);
            }
            Step::SendData(payload) => {
                let listener: TcpListener = data_listener.take().unwrap();
                let (mut data, _) = listener.accept().await.unwrap();
                // The client may already have given up on the transfer.
                let _ = data.write_all(payload.as_bytes()).await;
                let _ = data.shutdown().await;
            }
            Step::ReceiveData => {
                let listener: TcpListener = data_listener.take().unwrap();
                let (mut data, _) = listener.accept().await.unwrap();
                let mut upload = Vec::new();
                data.read_to_end(&mut upload).await.unwrap();
                transcript.uploads.push(upload);
            }
            Step::Hangup => return transcript,
        }
    }

    loop {
        let mut line = String::new();
        match reader.read_line(&mut line).await {
            Ok(0) | Err(_) => break,
            Ok(_) => transcript
                .commands
                .push(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }
    transcript
}
