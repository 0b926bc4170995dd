use sea_orm::{ConnectionTrait, DbErr, FromQueryResult, Statement};
use tracing::instrument;

use crate::models::pokemon::PokemonRecord;
use crate::utils::identifier::LookupKey;

// The key is always bound, never spliced into the SQL text.
const FIND_BY_KEY: &str = "SELECT id, name, types, form, image FROM pokemon WHERE id = ?";

/// All records stored under `key`, in storage order. No match is an empty list.
#[instrument(skip(db, key), fields(key = %key))]
pub async fn find_by_key<C>(db: &C, key: &LookupKey) -> Result<Vec<PokemonRecord>, DbErr>
where
    C: ConnectionTrait,
{
    let stmt = Statement::from_sql_and_values(
        db.get_database_backend(),
        FIND_BY_KEY,
        [key.as_str().into()],
    );

    PokemonRecord::find_by_statement(stmt).all(db).await
}
