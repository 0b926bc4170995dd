use utoipa::IntoParams;

const PARAM: &str = "pokemon_id";

/// Query string accepted by the lookup endpoint.
#[derive(Debug, Default, PartialEq, Eq, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LookupQuery {
    /// National dex number, `0` to `1025`. Omit to get the search form.
    #[param(example = "25")]
    pub pokemon_id: Option<String>,
}

impl LookupQuery {
    /// Picks `pokemon_id` out of decoded query pairs. When the parameter is
    /// repeated the first occurrence wins and the rest are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let pokemon_id = pairs
            .into_iter()
            .find(|(name, _)| name == PARAM)
            .map(|(_, value)| value);
        Self { pokemon_id }
    }
}
