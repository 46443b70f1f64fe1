//! NICKS command handler.

use super::{ChatEffect, CommandContext, CommandResult, find_player};
use crate::error::PluginResult;
use crate::history::format_history;
use crate::host::Player;

/// Handle `nicks <login>`.
pub async fn handle_nicks(
    ctx: &CommandContext<'_>,
    issuer: &Player,
    target: Option<&str>,
) -> PluginResult<CommandResult> {
    let Some(login) = target else {
        return Ok(vec![ChatEffect::Usage {
            login: issuer.login.clone(),
            text: "Usage example: '//nicks login'".to_string(),
        }]);
    };

    let player = find_player(ctx, login)?;
    let nicks = ctx.history.get_history(&player).await?;

    let text = format_history(&nicks, ctx.separator);
    Ok(vec![ChatEffect::Information {
        login: issuer.login.clone(),
        text: format!("Known nicks of \"{}\": {}", login, text),
    }])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{TestHost, context, history, moderator};
    use crate::error::PluginError;
    use crate::host::AuthLevel;

    #[tokio::test]
    async fn test_nicks_without_argument_shows_usage() {
        let history = history().await;
        let host = TestHost::new().with_player(moderator(), AuthLevel::Moderator);
        let ctx = context(&history, &host);

        let effects = handle_nicks(&ctx, &moderator(), None).await.unwrap();

        assert_eq!(
            effects,
            vec![ChatEffect::Usage {
                login: "mod".to_string(),
                text: "Usage example: '//nicks login'".to_string(),
            }]
        );
        assert_eq!(host.lookups(), 0);
    }

    #[tokio::test]
    async fn test_nicks_unknown_player_skips_storage() {
        let history = history().await;
        // Storage access would fail loudly on a closed pool.
        history.db().close().await;
        let host = TestHost::new().with_player(moderator(), AuthLevel::Moderator);
        let ctx = context(&history, &host);

        let err = handle_nicks(&ctx, &moderator(), Some("ghost"))
            .await
            .unwrap_err();

        assert!(matches!(err, PluginError::PlayerNotFound(ref login) if login == "ghost"));
        assert!(!err.is_fault());
        assert_eq!(host.lookups(), 1);
    }

    #[tokio::test]
    async fn test_nicks_lists_history() {
        let history = history().await;
        history.record_connect(42, "Foo").await.unwrap();
        history.record_connect(42, "Bar").await.unwrap();
        history.record_connect(42, "Foo").await.unwrap();

        let host = TestHost::new()
            .with_player(moderator(), AuthLevel::Moderator)
            .with_player(Player::new(42, "foo", "Foo"), AuthLevel::Player);
        let ctx = context(&history, &host);

        let effects = handle_nicks(&ctx, &moderator(), Some("foo")).await.unwrap();

        assert_eq!(
            effects,
            vec![ChatEffect::Information {
                login: "mod".to_string(),
                text: "Known nicks of \"foo\": Foo$z, Bar".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_nicks_backfills_unseen_player() {
        let history = history().await;
        let host = TestHost::new()
            .with_player(moderator(), AuthLevel::Moderator)
            .with_player(Player::new(9, "old", "OldTimer"), AuthLevel::Player);
        let ctx = context(&history, &host);

        let effects = handle_nicks(&ctx, &moderator(), Some("old")).await.unwrap();

        assert_eq!(
            effects,
            vec![ChatEffect::Information {
                login: "mod".to_string(),
                text: "Known nicks of \"old\": OldTimer".to_string(),
            }]
        );
        assert_eq!(history.db().nicknames().count(9).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_nicks_storage_failure_is_a_fault() {
        let history = history().await;
        history.db().close().await;
        let host = TestHost::new()
            .with_player(moderator(), AuthLevel::Moderator)
            .with_player(Player::new(42, "foo", "Foo"), AuthLevel::Player);
        let ctx = context(&history, &host);

        let err = handle_nicks(&ctx, &moderator(), Some("foo"))
            .await
            .unwrap_err();

        assert!(matches!(err, PluginError::StorageRead(_)));
        assert!(err.is_fault());
    }
}
