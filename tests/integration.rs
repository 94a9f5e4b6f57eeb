mod common;

use common::{logged_in, MockServer, Step};
use rax_ftp_client::client::ContinuationMode;
use rax_ftp_client::error::{AuthError, ProtocolError};
use rax_ftp_client::transfer::PassiveModeKind;
use rax_ftp_client::{ControlSession, FtpClientError, SessionConfig};

const LISTING: &str = "total 3\r\n\
    drwxr-xr-x   2 root     other        512 Apr  8  2003 etc\r\n\
    -rw-r--r--   1 root     other     4356349 Nov 23  2001 09 Ribbons Undone.wma\r\n\
    lrwxrwxrwx   1 root     other          7 Jan 25  2000 bin -> usr/bin\r\n";

async fn connect(server: &MockServer) -> ControlSession {
    ControlSession::connect(&server.address(), SessionConfig::default())
        .await
        .unwrap()
}

#[tokio::test]
async fn test_login_and_list() {
    let server = MockServer::start(logged_in(vec![
        Step::Pasv,
        Step::Reply("150 Here comes the directory listing\r\n"),
        Step::SendData(LISTING),
        Step::Send("226 Directory send OK\r\n"),
        Step::Reply("200 NOOP ok\r\n"),
    ]))
    .await;

    let mut session = connect(&server).await;
    session.login("anonymous", "guest@").await.unwrap();
    assert!(session.state().is_logged_in());

    let report = session.list_report("/pub").await.unwrap();
    let names: Vec<_> = report.entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["etc", "09 Ribbons Undone.wma", "bin"]);
    assert_eq!(report.entries[2].link_target.as_deref(), Some("usr/bin"));
    assert_eq!(report.skipped, ["total 3"]);

    // The completion reply was consumed; NOOP sees its own answer.
    session.no_op().await.unwrap();
    session.quit().await;

    let transcript = server.finish().await;
    assert_eq!(
        transcript.commands,
        [
            "USER anonymous",
            "PASS guest@",
            "PASV",
            "LIST /pub",
            "NOOP",
            "QUIT"
        ]
    );
}

#[tokio::test]
async fn test_list_over_epsv() {
    let server = MockServer::start(logged_in(vec![
        Step::Epsv,
        Step::Reply("150 Listing\r\n"),
        Step::SendData("04-27-00  09:09PM       <DIR>          licensed\r\n"),
        Step::Send("226 Done\r\n"),
    ]))
    .await;

    let config = SessionConfig {
        passive_mode: PassiveModeKind::Epsv,
        ..SessionConfig::default()
    };
    let mut session = ControlSession::connect(&server.address(), config)
        .await
        .unwrap();
    assert_eq!(session.config().passive_mode, PassiveModeKind::Epsv);
    session.login("anonymous", "guest@").await.unwrap();
    let entries = session.list("").await.unwrap();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].try_cwd);
    session.quit().await;

    let transcript = server.finish().await;
    assert_eq!(transcript.commands[2..], ["EPSV", "LIST", "QUIT"]);
}

#[tokio::test]
async fn test_login_without_password() {
    let server = MockServer::start(vec![
        Step::Send("220 ready\r\n"),
        Step::Reply("230 No password needed\r\n"),
        Step::Reply("257 \"/\" is the current directory\r\n"),
    ])
    .await;

    let mut session = connect(&server).await;
    session.login("ftp", "unused").await.unwrap();
    assert_eq!(session.current_dir().await.unwrap(), "/");
    session.quit().await;

    let transcript = server.finish().await;
    assert_eq!(transcript.commands, ["USER ftp", "PWD", "QUIT"]);
}

#[tokio::test]
async fn test_rejected_login_keeps_session() {
    let server = MockServer::start(vec![
        Step::Send("220 ready\r\n"),
        Step::Reply("331 Password required\r\n"),
        Step::Reply("530 Login incorrect\r\n"),
        Step::Reply("200 ok\r\n"),
    ])
    .await;

    let mut session = connect(&server).await;
    let err = session.login("user", "wrong").await.unwrap_err();
    assert!(matches!(
        err,
        FtpClientError::Auth(AuthError::Rejected { code: 530, .. })
    ));
    assert!(!session.state().is_logged_in());
    session.no_op().await.unwrap();
    session.quit().await;

    let transcript = server.finish().await;
    assert_eq!(transcript.commands[1], "PASS wrong");
}

#[tokio::test]
async fn test_store_uploads_bytes() {
    let server = MockServer::start(logged_in(vec![
        Step::Pasv,
        Step::Reply("150 Ok to send data\r\n"),
        Step::ReceiveData,
        Step::Send("226 Transfer complete\r\n"),
    ]))
    .await;

    let mut session = connect(&server).await;
    session.login("user", "secret").await.unwrap();
    let mut source: &[u8] = b"hello world";
    let written = session.store("upload.txt", &mut source).await.unwrap();
    assert_eq!(written, 11);
    session.quit().await;

    let transcript = server.finish().await;
    assert_eq!(transcript.uploads, [b"hello world".to_vec()]);
    assert!(transcript.commands.contains(&"STOR upload.txt".to_string()));
}

#[tokio::test]
async fn test_retrieve_with_multiline_preamble() {
    let server = MockServer::start(logged_in(vec![
        Step::Pasv,
        Step::Reply("150-Opening BINARY mode data connection\r\n150 for notes.txt (5 bytes)\r\n"),
        Step::SendData("notes"),
        Step::Send("226 Transfer complete\r\n"),
        Step::Reply("200 ok\r\n"),
    ]))
    .await;

    let mut session = connect(&server).await;
    session.login("user", "secret").await.unwrap();
    assert_eq!(session.retrieve("notes.txt").await.unwrap(), b"notes");
    session.no_op().await.unwrap();
    session.quit().await;
    server.finish().await;
}

#[tokio::test]
async fn test_indented_quota_banner_is_skipped() {
    let server = MockServer::start(logged_in(vec![
        Step::Pasv,
        Step::Reply("150 Opening data connection\r\n"),
        Step::SendData("abc"),
        Step::Send("  Disk quota: 10 MB\r\n  Used: 2 MB\r\n226 Transfer complete\r\n"),
        Step::Reply("200 ok\r\n"),
    ]))
    .await;

    let mut session = connect(&server).await;
    session.login("user", "secret").await.unwrap();
    assert_eq!(session.retrieve("abc.txt").await.unwrap(), b"abc");
    session.no_op().await.unwrap();
    session.quit().await;
    server.finish().await;
}

/// Server sends a multi-line 226 whose middle line carries no code.
const QUOTA_COMPLETION: &str = "226-Maximum disk quota limited to 100000 kBytes\r\n    Used disk quota 78 kBytes, available 99921 kBytes\r\n226 Transfer complete.\r\n";

async fn list_then_pwd_after_quota_completion(continuation: ContinuationMode) {
    let server = MockServer::start(logged_in(vec![
        Step::Pasv,
        Step::Reply("150 Here comes the directory listing\r\n"),
        Step::SendData(LISTING),
        Step::Send(QUOTA_COMPLETION),
        Step::Reply("257 \"/x\" is current directory\r\n"),
        Step::Reply("200 ok\r\n"),
    ]))
    .await;

    let config = SessionConfig {
        continuation,
        ..SessionConfig::default()
    };
    let mut session = ControlSession::connect(&server.address(), config)
        .await
        .unwrap();
    session.login("user", "secret").await.unwrap();
    assert_eq!(session.list("").await.unwrap().len(), 3);
    assert_eq!(session.current_dir().await.unwrap(), "/x");
    session.no_op().await.unwrap();
    session.quit().await;

    let transcript = server.finish().await;
    assert_eq!(transcript.commands[2..], ["PASV", "LIST", "PWD", "NOOP", "QUIT"]);
}

#[tokio::test]
async fn test_quota_completion_with_absorbed_continuation() {
    list_then_pwd_after_quota_completion(ContinuationMode::Absorb).await;
}

#[tokio::test]
async fn test_quota_completion_with_first_line_replies() {
    list_then_pwd_after_quota_completion(ContinuationMode::FirstLine).await;
}

#[tokio::test]
async fn test_failed_completion_after_data_eof() {
    let server = MockServer::start(logged_in(vec![
        Step::Pasv,
        Step::Reply("150 Here comes the directory listing\r\n"),
        Step::SendData(LISTING),
        Step::Send("451 Local error in processing\r\n"),
        Step::Reply("200 ok\r\n"),
    ]))
    .await;

    let mut session = connect(&server).await;
    session.login("user", "secret").await.unwrap();
    let err = session.list("").await.unwrap_err();
    assert_eq!(err.status_code(), Some(451));
    assert!(!session.state().is_closed());
    assert!(!session.state().is_completion_pending());

    session.no_op().await.unwrap();
    session.quit().await;

    let transcript = server.finish().await;
    assert_eq!(transcript.commands[2..], ["PASV", "LIST", "NOOP", "QUIT"]);
}

#[tokio::test]
async fn test_repeated_passive_reply_after_data_eof() {
    let server = MockServer::start(logged_in(vec![
        Step::Pasv,
        Step::Reply("150 Here comes the directory listing\r\n"),
        Step::SendData(LISTING),
        Step::Send("227 Entering Passive Mode (127,0,0,1,0,0)\r\n"),
        Step::Reply("200 ok\r\n"),
    ]))
    .await;

    let mut session = connect(&server).await;
    session.login("user", "secret").await.unwrap();
    let entries = session.list("").await.unwrap();
    assert_eq!(entries.len(), 3);
    session.no_op().await.unwrap();
    session.quit().await;
    server.finish().await;
}

#[tokio::test]
async fn test_stray_logged_in_before_pwd_reply() {
    let server = MockServer::start(logged_in(vec![
        Step::Reply("230 Already logged in\r\n257 \"/home/user\" is current\r\n"),
        Step::Reply("200 ok\r\n"),
    ]))
    .await;

    let mut session = connect(&server).await;
    session.login("user", "secret").await.unwrap();
    assert_eq!(session.current_dir().await.unwrap(), "/home/user");
    session.no_op().await.unwrap();
    session.quit().await;
    server.finish().await;
}

#[tokio::test]
async fn test_unexpected_transfer_preamble() {
    let server = MockServer::start(logged_in(vec![
        Step::Pasv,
        Step::Reply("550 No such file\r\n"),
        Step::Reply("200 ok\r\n"),
    ]))
    .await;

    let mut session = connect(&server).await;
    session.login("user", "secret").await.unwrap();
    let err = session.retrieve("missing.txt").await.unwrap_err();
    assert_eq!(err.status_code(), Some(550));
    assert!(!session.state().is_completion_pending());
    session.no_op().await.unwrap();
    session.quit().await;
    server.finish().await;
}

#[tokio::test]
async fn test_dropped_channel_is_settled_before_next_command() {
    let server = MockServer::start(logged_in(vec![
        Step::Pasv,
        Step::Reply("150 Opening data connection\r\n"),
        Step::SendData("unread"),
        Step::Send("226 Transfer complete\r\n"),
        Step::Reply("200 ok\r\n"),
    ]))
    .await;

    let mut session = connect(&server).await;
    session.login("user", "secret").await.unwrap();
    let channel = session.retr("big.iso").await.unwrap();
    drop(channel);
    assert!(session.state().is_completion_pending());

    session.no_op().await.unwrap();
    assert!(!session.state().is_completion_pending());
    session.quit().await;
    server.finish().await;
}

#[tokio::test]
async fn test_closed_channel_accepts_abort_reply() {
    let server = MockServer::start(logged_in(vec![
        Step::Pasv,
        Step::Reply("150 Opening data connection\r\n"),
        Step::SendData("partial"),
        Step::Send("426 Connection closed; transfer aborted\r\n"),
        Step::Reply("200 ok\r\n"),
    ]))
    .await;

    let mut session = connect(&server).await;
    session.login("user", "secret").await.unwrap();
    let channel = session.retr("big.iso").await.unwrap();
    channel.close().await.unwrap();
    session.no_op().await.unwrap();
    session.quit().await;
    server.finish().await;
}

#[tokio::test]
async fn test_bad_greeting_fails_connect() {
    let server = MockServer::start(vec![Step::Send("421 Too many users\r\n")]).await;

    let err = ControlSession::connect(&server.address(), SessionConfig::default())
        .await
        .err()
        .unwrap();
    assert_eq!(err.status_code(), Some(421));

    let transcript = server.finish().await;
    assert_eq!(transcript.commands, ["QUIT"]);
}

#[tokio::test]
async fn test_session_fails_fast_after_disconnect() {
    let server = MockServer::start(vec![Step::Send("220 ready\r\n"), Step::Hangup]).await;

    let mut session = connect(&server).await;
    server.finish().await;

    let err = session.no_op().await.unwrap_err();
    assert!(matches!(err, FtpClientError::Transport(_)));
    assert!(session.state().is_closed());

    let err = session.change_dir("/pub").await.unwrap_err();
    assert!(matches!(err, FtpClientError::SessionClosed));
}

#[tokio::test]
async fn test_line_breaks_in_arguments_are_refused() {
    let server = MockServer::start(vec![
        Step::Send("220 ready\r\n"),
        Step::Reply("200 ok\r\n"),
    ])
    .await;

    let mut session = connect(&server).await;
    let err = session.delete("a.txt\r\nRMD /").await.unwrap_err();
    assert!(matches!(
        err,
        FtpClientError::Protocol(ProtocolError::InvalidArgument(_))
    ));
    session.no_op().await.unwrap();
    session.quit().await;

    let transcript = server.finish().await;
    assert_eq!(transcript.commands, ["NOOP", "QUIT"]);
}
