use crate::pruning::PruneStrategy;

// Defaults for parameters
const PRUNE_STRATEGY_DEFAULT: PruneStrategy = PruneStrategy::Rescan;
const VALIDATE_INPUT_DEFAULT: bool = true;
const VERIFY_OUTPUT_DEFAULT: bool = false;

/// A wrapper around the options of the MST heuristic. Only use if you want to change them.
/// Otherwise use `SteinerTree::default_params()` to solve with the defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct SteinerParams {
    pub(crate) prune_strategy: PruneStrategy,
    pub(crate) validate_input: bool,
    pub(crate) verify_output: bool,
}

/// Builder object to set custom parameters.
pub struct ParamBuilder {
    prune_strategy: Option<PruneStrategy>,
    validate_input: Option<bool>,
    verify_output: Option<bool>,
}

impl SteinerParams {
    /// Enters the builder pattern, allowing custom parameters to be set using
    /// various setter methods.
    ///
    /// # Returns
    /// * the parameter configuration builder
    pub fn builder() -> ParamBuilder {
        ParamBuilder {
            prune_strategy: None,
            validate_input: None,
            verify_output: None,
        }
    }
}

impl Default for SteinerParams {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ParamBuilder {

    /// Sets how non-terminal leaves are searched for while pruning the spanning tree.
    /// Does not change the result, only the work done to reach it. Defaults to Rescan.
    ///
    /// # Parameters
    /// * prune_strategy - the leaf search strategy
    ///
    /// # Returns
    /// * the parameter configuration builder
    pub fn prune_strategy(mut self, prune_strategy: PruneStrategy) -> ParamBuilder {
        self.prune_strategy = Some(prune_strategy);
        self
    }

    /// Sets whether to check that edge endpoints are in range and weights are finite before
    /// solving. Without the check, bad input panics or gives meaningless output.
    /// Defaults to true.
    ///
    /// # Parameters
    /// * validate_input - whether to validate the graph
    ///
    /// # Returns
    /// * the parameter configuration builder
    pub fn validate_input(mut self, validate_input: bool) -> ParamBuilder {
        self.validate_input = Some(validate_input);
        self
    }

    /// Sets whether to verify the pruned tree after solving: that it is acyclic, uses only
    /// graph edges, and connects every terminal. Violations are logged as warnings, they do
    /// not fail the solve. Defaults to false.
    ///
    /// # Parameters
    /// * verify_output - whether to verify the result
    ///
    /// # Returns
    /// * the parameter configuration builder
    pub fn verify_output(mut self, verify_output: bool) -> ParamBuilder {
        self.verify_output = Some(verify_output);
        self
    }

    /// Finishes the building of the parameter configuration. A call to this method is
    /// required to exit the builder pattern.
    ///
    /// # Returns
    /// * The completed parameter configuration.
    pub fn build(self) -> SteinerParams {
        SteinerParams {
            prune_strategy: self.prune_strategy.unwrap_or(PRUNE_STRATEGY_DEFAULT),
            validate_input: self.validate_input.unwrap_or(VALIDATE_INPUT_DEFAULT),
            verify_output: self.verify_output.unwrap_or(VERIFY_OUTPUT_DEFAULT),
        }
    }
}
