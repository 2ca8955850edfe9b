//! San Segundo's greedy bitset colouring, producing a branch order and a
//! non-decreasing per-position colour-count upper bound.

use crate::bitgraph::BitGraph;
use crate::bitset::BitSet;

/// policy controlling how colour classes are arranged before branching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CCOPermutations {
    /// emit classes as produced
    None,
    /// move singleton classes to the front, preserving relative order
    Defer1,
    /// repair pass: move each vertex to the earliest conflict-free class
    RepairAll,
    /// `RepairAll` followed by `Defer1`
    RepairAllDefer1,
    /// repair pass restricted to vertices whose class has more than one member
    RepairSelected,
    /// `RepairSelected` followed by `Defer1`
    RepairSelectedDefer1,
}

/// `p_order[i]` is the `i`-th vertex to branch on (branch order is last to
/// first); `colours[i]` is a non-decreasing upper bound on `ω(G[p_order[0..=i]])`
pub struct Colouring {
    pub p_order: Vec<u32>,
    pub colours: Vec<u32>,
}

/// colour the candidate set `p` of `graph`, applying `policy` to the raw
/// colour classes before flattening them into `p_order`/`colours`
pub fn colourise(graph: &BitGraph, p: &BitSet, policy: CCOPermutations) -> Colouring {
    let mut classes = raw_classes(graph, p);

    match policy {
        CCOPermutations::None => {}
        CCOPermutations::Defer1 => defer1(&mut classes),
        CCOPermutations::RepairAll => repair(graph, &mut classes, false),
        CCOPermutations::RepairAllDefer1 => {
            repair(graph, &mut classes, false);
            defer1(&mut classes);
        }
        CCOPermutations::RepairSelected => repair(graph, &mut classes, true),
        CCOPermutations::RepairSelectedDefer1 => {
            repair(graph, &mut classes, true);
            defer1(&mut classes);
        }
    }

    flatten(classes)
}

/// one greedy colour class: its member vertices in ascending bit order
type ColourClass = Vec<u32>;

fn raw_classes(graph: &BitGraph, p: &BitSet) -> Vec<ColourClass> {
    let mut p_left = p.clone();
    let mut classes = Vec::new();

    while !p_left.is_empty() {
        let mut q = p_left.clone();
        let mut class = Vec::new();
        while !q.is_empty() {
            let v = q.first_set_bit();
            p_left.unset(v);
            q.unset(v);
            q.intersect_with_complement(graph.neighbourhood(v));
            class.push(v as u32);
        }
        classes.push(class);
    }

    classes
}

/// move singleton classes to the front, preserving relative order within
/// each group
fn defer1(classes: &mut Vec<ColourClass>) {
    let mut singletons = Vec::new();
    let mut rest = Vec::new();
    for class in classes.drain(..) {
        if class.len() == 1 {
            singletons.push(class);
        } else {
            rest.push(class);
        }
    }
    singletons.extend(rest);
    *classes = singletons;
}

/// move each vertex to the earliest class with which it has no conflict,
/// scanning classes in order; `selected_only` restricts repair attempts to
/// vertices whose current class has more than one member
fn repair(graph: &BitGraph, classes: &mut Vec<ColourClass>, selected_only: bool) {
    let mut i = 0;
    while i < classes.len() {
        if selected_only && classes[i].len() <= 1 {
            i += 1;
            continue;
        }
        let mut j = 0;
        while j < classes[i].len() {
            let v = classes[i][j];
            let mut moved = false;
            for k in 0..i {
                if classes[k].iter().all(|&u| !graph.adjacent(v as usize, u as usize)) {
                    classes[i].remove(j);
                    classes[k].push(v);
                    moved = true;
                    break;
                }
            }
            if !moved {
                j += 1;
            }
        }
        i += 1;
    }
    classes.retain(|c| !c.is_empty());
}

fn flatten(classes: Vec<ColourClass>) -> Colouring {
    let mut p_order = Vec::new();
    let mut colours = Vec::new();
    for (k, class) in classes.into_iter().enumerate() {
        for v in class {
            p_order.push(v);
            colours.push((k + 1) as u32);
        }
    }
    Colouring { p_order, colours }
}
