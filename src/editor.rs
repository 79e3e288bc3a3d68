//! The host-facing entry point.
//!
//! An [`Editor`] owns one graph together with everything that is specific to
//! viewing it: the viewport, the interaction state, the render configuration
//! and the status of the request that generates new graphs. A host UI feeds it
//! input events, asks for a [`Scene`] after each change and paints it.

use crate::error::{GraphError, SchemaError};
use crate::geometry::{Point, Size, compute_bounds};
use crate::graph::{Graph, IdGenerator, NodeId, VariableAccess};
use crate::interaction::{
    DetailView, EditorEvent, InputEvent, Interaction, InteractionConfig, InteractionState,
};
use crate::render::{RenderConfig, Scene, loading_scene, project};
use crate::schema::IntoGraph;
use crate::session::{Generation, RequestId, RequestTracker};
use crate::viewport::Viewport;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct Editor {
    graph: Graph,
    viewport: Viewport,
    interaction: Interaction,
    requests: RequestTracker<Graph>,
    config: RenderConfig,
    container: Option<Size>,
    ids: IdGenerator,
}

impl Default for Editor {
    fn default() -> Self {
        Self::with_config(RenderConfig::default(), InteractionConfig::default())
    }
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(render: RenderConfig, interaction: InteractionConfig) -> Self {
        Self {
            graph: Graph::new(),
            viewport: Viewport::default(),
            interaction: Interaction::new(interaction),
            requests: RequestTracker::new(),
            config: render,
            container: None,
            ids: IdGenerator::new(),
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn state(&self) -> &InteractionState {
        self.interaction.state()
    }

    pub fn selected(&self) -> Option<&NodeId> {
        self.interaction.selected()
    }

    pub fn generation(&self) -> &Generation<Graph> {
        self.requests.state()
    }

    /// Sets the size of the drawing surface, enabling fit-to-content.
    pub fn set_container(&mut self, width: f32, height: f32) {
        self.container = Some(Size::new(width, height));
    }

    /// Feeds one input event to the interaction layer.
    ///
    /// While a request is loading or has failed, the graph is not on screen
    /// and input is dropped.
    pub fn handle_event(&mut self, event: InputEvent) -> Vec<EditorEvent> {
        if !matches!(self.requests.state(), Generation::Idle) {
            debug!(?event, "input ignored while the graph is hidden");
            return Vec::new();
        }
        self.interaction.handle(
            event,
            &mut self.graph,
            &mut self.viewport,
            &self.config.layout,
        )
    }

    /// Runs a mutation against the graph.
    ///
    /// If the mutation removed the selected or dragged node, the interaction
    /// state falls back to idle.
    pub fn edit<R>(&mut self, f: impl FnOnce(&mut Graph) -> R) -> R {
        let result = f(&mut self.graph);
        if self.interaction.forget_missing(&self.graph) {
            debug!("selection dropped after edit");
        }
        result
    }

    /// Adds a getter or setter for a declared variable at `position`.
    pub fn spawn_variable_node(
        &mut self,
        name: &str,
        access: VariableAccess,
        position: Point,
    ) -> Result<NodeId, GraphError> {
        self.graph
            .spawn_variable_node(&mut self.ids, name, access, position)
    }

    /// Removes a variable and every node derived from it.
    pub fn remove_variable(&mut self, name: &str) -> Result<Vec<NodeId>, GraphError> {
        self.edit(|graph| graph.remove_variable(name))
    }

    /// Frames the whole graph in the container. Returns false if there is
    /// nothing to fit or no container size is known.
    pub fn fit_to_content(&mut self) -> bool {
        let Some(container) = self.container else {
            return false;
        };
        let Some(bounds) = compute_bounds(self.graph.nodes(), &self.config.layout) else {
            return false;
        };
        self.viewport
            .fit_to_content(bounds, container, self.interaction.config().fit_padding);
        true
    }

    /// What the host should paint right now.
    pub fn scene(&self) -> Scene {
        match self.requests.state() {
            Generation::Loading => loading_scene(&self.viewport, &self.config),
            Generation::Failed(message) => Scene::Failed {
                message: message.clone(),
            },
            Generation::Idle | Generation::Ready(_) => project(
                &self.graph,
                &self.viewport,
                &self.config,
                self.selected().map(NodeId::as_str),
            ),
        }
    }

    /// Detail view of the selected node.
    pub fn detail(&self) -> Option<DetailView> {
        let selected = self.selected()?;
        DetailView::for_node(&self.graph, selected.as_str())
    }

    /// Replaces the graph wholesale and resets everything tied to the old one.
    pub fn load_graph(&mut self, graph: Graph) {
        info!(
            nodes = graph.nodes().len(),
            connections = graph.connections().len(),
            "graph loaded"
        );
        self.graph = graph;
        self.interaction.reset();
        self.requests.clear();
        self.fit_to_content();
    }

    pub fn load(&mut self, source: impl IntoGraph) -> Result<(), SchemaError> {
        let graph = source.into_graph()?;
        self.load_graph(graph);
        Ok(())
    }

    /// Marks a new generation request as in flight. Older requests become stale.
    pub fn begin_request(&mut self) -> RequestId {
        self.interaction.reset();
        self.requests.begin()
    }

    /// Applies the outcome of request `id`. Returns false for stale responses.
    pub fn resolve_request(&mut self, id: RequestId, result: Result<Graph, String>) -> bool {
        if !self.requests.resolve(id, result) {
            return false;
        }
        if let Some(graph) = self.requests.take_ready() {
            self.load_graph(graph);
        }
        true
    }

    /// Hides the error banner of a failed request and shows the graph again.
    ///
    /// Returns false if no failure was showing.
    pub fn dismiss_failure(&mut self) -> bool {
        if !matches!(self.requests.state(), Generation::Failed(_)) {
            return false;
        }
        self.requests.clear();
        true
    }

    /// Like [`Editor::resolve_request`] for a raw schema JSON response.
    ///
    /// A response that fails to parse counts as a failed request.
    pub fn resolve_json(&mut self, id: RequestId, response: Result<String, String>) -> bool {
        let result = response.and_then(|json| Graph::from_json(&json).map_err(|e| e.to_string()));
        self.resolve_request(id, result)
    }
}
