//! Hub のディスパッチャ
//!
//! 全ての Hub 操作を 1 つのタスクで順番に実行する。WebSocket ハンドラは
//! `HubHandle` 経由でコマンドを送るだけで、Roster にもブロードキャストにも直接触れない。
//! そのため、ある接続から見たイベントの順序は Hub が処理した順序と一致する。

use std::sync::Arc;

use bilingo_shared::time::Clock;
use tokio::{sync::mpsc, task::JoinHandle};

use crate::domain::{ConnectionId, DisplayName, MessagePusher, PusherChannel, RosterRepository};

use super::{
    ConnectParticipantUseCase, DisconnectParticipantUseCase, JoinParticipantUseCase,
    RelayTypingUseCase, SendMessageUseCase, error::HubUnavailableError,
};

/// Hub に対する操作
#[derive(Debug)]
pub enum HubCommand {
    Connect {
        connection_id: ConnectionId,
        sender: PusherChannel,
    },
    Join {
        connection_id: ConnectionId,
        name: DisplayName,
    },
    SendMessage {
        connection_id: ConnectionId,
        text: String,
    },
    SetTyping {
        connection_id: ConnectionId,
        is_typing: bool,
    },
    Disconnect {
        connection_id: ConnectionId,
    },
}

/// ディスパッチャにコマンドを送るためのハンドル
#[derive(Debug, Clone)]
pub struct HubHandle {
    tx: mpsc::UnboundedSender<HubCommand>,
}

impl HubHandle {
    pub fn send(&self, command: HubCommand) -> Result<(), HubUnavailableError> {
        self.tx.send(command).map_err(|_| HubUnavailableError)
    }

    pub fn connect(
        &self,
        connection_id: ConnectionId,
        sender: PusherChannel,
    ) -> Result<(), HubUnavailableError> {
        self.send(HubCommand::Connect {
            connection_id,
            sender,
        })
    }

    pub fn join(
        &self,
        connection_id: ConnectionId,
        name: DisplayName,
    ) -> Result<(), HubUnavailableError> {
        self.send(HubCommand::Join {
            connection_id,
            name,
        })
    }

    pub fn send_message(
        &self,
        connection_id: ConnectionId,
        text: String,
    ) -> Result<(), HubUnavailableError> {
        self.send(HubCommand::SendMessage {
            connection_id,
            text,
        })
    }

    pub fn set_typing(
        &self,
        connection_id: ConnectionId,
        is_typing: bool,
    ) -> Result<(), HubUnavailableError> {
        self.send(HubCommand::SetTyping {
            connection_id,
            is_typing,
        })
    }

    pub fn disconnect(&self, connection_id: ConnectionId) -> Result<(), HubUnavailableError> {
        self.send(HubCommand::Disconnect { connection_id })
    }
}

/// Hub の操作を逐次実行するディスパッチャ
pub struct HubDispatcher {
    connect_participant_usecase: ConnectParticipantUseCase,
    join_participant_usecase: JoinParticipantUseCase,
    send_message_usecase: SendMessageUseCase,
    relay_typing_usecase: RelayTypingUseCase,
    disconnect_participant_usecase: DisconnectParticipantUseCase,
}

impl HubDispatcher {
    pub fn new(
        repository: Arc<dyn RosterRepository>,
        message_pusher: Arc<dyn MessagePusher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            connect_participant_usecase: ConnectParticipantUseCase::new(message_pusher.clone()),
            join_participant_usecase: JoinParticipantUseCase::new(
                repository.clone(),
                message_pusher.clone(),
                clock.clone(),
            ),
            send_message_usecase: SendMessageUseCase::new(
                repository.clone(),
                message_pusher.clone(),
                clock.clone(),
            ),
            relay_typing_usecase: RelayTypingUseCase::new(
                repository.clone(),
                message_pusher.clone(),
            ),
            disconnect_participant_usecase: DisconnectParticipantUseCase::new(
                repository,
                message_pusher,
                clock,
            ),
        }
    }

    /// コマンドを 1 つ実行する
    ///
    /// 配送の失敗はログに記録するだけで、Hub は次のコマンドの処理を続ける。
    pub async fn dispatch(&self, command: HubCommand) {
        let result = match command {
            HubCommand::Connect {
                connection_id,
                sender,
            } => {
                self.connect_participant_usecase
                    .execute(connection_id, sender)
                    .await;
                Ok(())
            }
            HubCommand::Join {
                connection_id,
                name,
            } => self
                .join_participant_usecase
                .execute(connection_id, name)
                .await
                .map(|_| ()),
            HubCommand::SendMessage {
                connection_id,
                text,
            } => self
                .send_message_usecase
                .execute(connection_id, text)
                .await
                .map(|_| ()),
            HubCommand::SetTyping {
                connection_id,
                is_typing,
            } => self
                .relay_typing_usecase
                .execute(connection_id, is_typing)
                .await
                .map(|_| ()),
            HubCommand::Disconnect { connection_id } => self
                .disconnect_participant_usecase
                .execute(connection_id)
                .await
                .map(|_| ()),
        };

        if let Err(e) = result {
            tracing::warn!("Hub command failed: {}", e);
        }
    }

    /// ディスパッチャをバックグラウンドタスクとして起動する
    ///
    /// 全ての `HubHandle` が drop されるとタスクは終了する。
    pub fn spawn(self) -> (HubHandle, JoinHandle<()>) {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(async move {
            while let Some(command) = rx.recv().await {
                self.dispatch(command).await;
            }
            tracing::info!("Hub dispatcher stopped");
        });
        (HubHandle { tx }, task)
    }
}
