use log::info;
use std::collections::{HashMap, VecDeque};
use std::time::Instant;

/// Profiler de frames : durées de blocs labelisés (ms) et métriques
/// scalaires (compteurs d'entités, points dessinés), sur une fenêtre
/// glissante de `max_samples` valeurs.
#[derive(Debug)]
pub struct Profiler {
    samples: HashMap<&'static str, VecDeque<f32>>,
    metrics: HashMap<&'static str, VecDeque<usize>>,
    max_samples: usize,
}

impl Profiler {
    pub fn new(max_samples: usize) -> Self {
        Self {
            samples: HashMap::new(),
            metrics: HashMap::new(),
            max_samples: max_samples.max(1),
        }
    }

    /// Profile un bloc de code et retourne sa valeur de retour
    pub fn profile_block<T, F>(&mut self, label: &'static str, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        let start = Instant::now();
        let result = f();
        let dt = start.elapsed().as_secs_f32() * 1000.0;
        push_bounded(self.samples.entry(label).or_default(), dt, self.max_samples);
        result
    }

    /// Enregistre une métrique scalaire
    pub fn record_metric(&mut self, label: &'static str, value: usize) {
        push_bounded(
            self.metrics.entry(label).or_default(),
            value,
            self.max_samples,
        );
    }

    /// Dernière valeur enregistrée pour une métrique
    pub fn last_metric(&self, label: &str) -> Option<usize> {
        self.metrics.get(label).and_then(|v| v.back().copied())
    }

    /// Résumé des temps mesurés (moyenne, min, max) en ms
    pub fn summary(&self) -> Vec<(&'static str, (f32, f32, f32))> {
        let mut out: Vec<_> = self
            .samples
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(&k, v)| {
                let avg = v.iter().sum::<f32>() / v.len() as f32;
                let min = v.iter().copied().fold(f32::MAX, f32::min);
                let max = v.iter().copied().fold(f32::MIN, f32::max);
                (k, (avg, min, max))
            })
            .collect();
        out.sort_by_key(|(k, _)| *k);
        out
    }

    /// Résumé des métriques scalaires (moyenne, min, max)
    pub fn metrics_summary(&self) -> Vec<(&'static str, (f32, usize, usize))> {
        let mut out: Vec<_> = self
            .metrics
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(&k, v)| {
                let avg = v.iter().sum::<usize>() as f32 / v.len() as f32;
                let min = v.iter().copied().min().unwrap_or(0);
                let max = v.iter().copied().max().unwrap_or(0);
                (k, (avg, min, max))
            })
            .collect();
        out.sort_by_key(|(k, _)| *k);
        out
    }

    /// Log toutes les métriques vers l’info log avec un target spécifique
    pub fn log_metrics_for_target(&self, target: &str) {
        for (label, (avg, min, max)) in self.summary() {
            info!(
                target: target,
                "{}: avg = {:.3} ms | min = {:.3} ms | max = {:.3} ms",
                label, avg, min, max
            );
        }
        for (label, (avg, min, max)) in self.metrics_summary() {
            info!(target: target, "{label}: avg={avg:.1}, min={min}, max={max}");
        }
    }
}

fn push_bounded<T>(buffer: &mut VecDeque<T>, value: T, max_samples: usize) {
    if buffer.len() >= max_samples {
        buffer.pop_front();
    }
    buffer.push_back(value);
}

/// Macro helper : déduit automatiquement le target via le module appelant
#[macro_export]
macro_rules! log_metrics {
    ($profiler:expr) => {
        $profiler.log_metrics_for_target(module_path!());
    };
}
