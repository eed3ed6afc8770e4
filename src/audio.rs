use anyhow::anyhow;
use wasm_bindgen::JsCast;
use web_sys as web;
use zerog_core::constants::ANALYSER_FFT_SIZE;
use zerog_core::AudioLevels;

use crate::cache::OnceCache;
use crate::constants::DEFAULT_BIN_COUNT;

/// WebAudio nodes built for one media element. A media element can be given
/// a source node only once, so the graph outlives every tap that uses it and
/// its context is never closed: the element's sound runs through it.
///
/// `source -> destination` is wired at build time and never removed, so the
/// host player stays audible. Taps add and remove `source -> analyser`.
#[derive(Clone)]
struct ElementGraph {
    ctx: web::AudioContext,
    source: web::MediaElementAudioSourceNode,
    analyser: web::AnalyserNode,
}

fn build_graph(element: &web::HtmlMediaElement) -> anyhow::Result<ElementGraph> {
    let ctx = web::AudioContext::new().map_err(|e| anyhow!("AudioContext: {:?}", e))?;
    let source = ctx
        .create_media_element_source(element)
        .map_err(|e| anyhow!("MediaElementSource: {:?}", e))?;
    source
        .connect_with_audio_node(&ctx.destination())
        .map_err(|e| anyhow!("connect destination: {:?}", e))?;
    let analyser = web::AnalyserNode::new(&ctx).map_err(|e| anyhow!("AnalyserNode: {:?}", e))?;
    analyser.set_fft_size(ANALYSER_FFT_SIZE);
    Ok(ElementGraph {
        ctx,
        source,
        analyser,
    })
}

/// Every element graph built during this page's lifetime.
#[derive(Default)]
pub struct AudioGraphs {
    graphs: OnceCache<web::HtmlMediaElement, ElementGraph>,
}

impl AudioGraphs {
    pub fn new() -> Self {
        Self::default()
    }

    fn graph_for(&mut self, element: &web::HtmlMediaElement) -> anyhow::Result<ElementGraph> {
        let graph = self.graphs.get_or_try_insert(
            element.clone(),
            |a, b| a.is_same_node(Some(b.as_ref())),
            build_graph,
        )?;
        Ok(graph.clone())
    }
}

/// The analyser branch a tap has hooked onto its element's graph.
struct Analysis {
    graph: ElementGraph,
    buf: Vec<f32>,
}

impl Analysis {
    fn connect(graph: ElementGraph) -> anyhow::Result<Self> {
        graph
            .source
            .connect_with_audio_node(&graph.analyser)
            .map_err(|e| anyhow!("connect analyser: {:?}", e))?;
        let bins = graph.analyser.frequency_bin_count() as usize;
        Ok(Self {
            graph,
            buf: vec![0.0; if bins > 0 { bins } else { DEFAULT_BIN_COUNT }],
        })
    }
}

/// One read of the audio element for the current frame.
#[derive(Clone, Copy, Debug)]
pub struct PlaybackSample {
    pub current_time: f64,
    pub duration: f64,
    pub playing: bool,
    pub levels: Option<AudioLevels>,
}

/// A host-provided audio element plus its optional frequency analysis.
/// Dropping the tap unhooks the analyser and leaves playback untouched.
pub struct AudioTap {
    pub track_id: String,
    element: web::HtmlMediaElement,
    analysis: Option<Analysis>,
}

impl AudioTap {
    /// Tap the element with id `element_id`. Missing WebAudio support only
    /// disables spectral levels; the element itself is still followed.
    pub fn attach(
        document: &web::Document,
        graphs: &mut AudioGraphs,
        element_id: &str,
        track_id: &str,
    ) -> anyhow::Result<Self> {
        let element = document
            .get_element_by_id(element_id)
            .ok_or_else(|| anyhow!("missing #{}", element_id))?
            .dyn_into::<web::HtmlMediaElement>()
            .map_err(|_| anyhow!("#{} is not a media element", element_id))?;
        let analysis = match graphs.graph_for(&element).and_then(Analysis::connect) {
            Ok(a) => {
                log::info!("[audio] analyser attached to #{} ({} bins)", element_id, a.buf.len());
                Some(a)
            }
            Err(e) => {
                log::warn!(
                    "[audio] analyser unavailable, scripted effects only: {:?}",
                    e
                );
                None
            }
        };
        Ok(Self {
            track_id: track_id.to_string(),
            element,
            analysis,
        })
    }

    pub fn has_analysis(&self) -> bool {
        self.analysis.is_some()
    }

    pub fn sample(&mut self) -> PlaybackSample {
        let playing = !self.element.paused() && !self.element.ended();
        let levels = match (&mut self.analysis, playing) {
            (Some(a), true) => {
                // Contexts start suspended until a user gesture; keep asking
                // until one is honoured.
                if a.graph.ctx.state() == web::AudioContextState::Suspended {
                    _ = a.graph.ctx.resume();
                }
                let analyser = &a.graph.analyser;
                let bins = analyser.frequency_bin_count() as usize;
                if bins > 0 && a.buf.len() != bins {
                    a.buf.resize(bins, 0.0);
                }
                analyser.get_float_frequency_data(&mut a.buf);
                Some(AudioLevels::from_db_bins(&a.buf))
            }
            _ => None,
        };
        PlaybackSample {
            current_time: self.element.current_time(),
            duration: self.element.duration(),
            playing,
            levels,
        }
    }
}

impl Drop for AudioTap {
    fn drop(&mut self) {
        if let Some(a) = self.analysis.take() {
            _ = a.graph.source.disconnect_with_audio_node(&a.graph.analyser);
        }
    }
}
